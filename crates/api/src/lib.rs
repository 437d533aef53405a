//! Cronara HTTP API
//!
//! Axum front end over the account services: onboarding, profile, business
//! settings and staff roster, plus the identity provider metadata sync.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use account_service_lib::infra::Database;
use account_service_lib::AccountServices;

use crate::clients::{IdentityClient, IdentityProvider};
use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server, reading the rest of the configuration from the environment.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: ApiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;
    let services = AccountServices::from_connection(db.get_connection());

    let identity = match &config.identity.url {
        Some(url) => {
            info!(url = %url, "Identity metadata sync enabled");
            let client = IdentityClient::new(url, config.identity.service_key.clone())?;
            Some(Arc::new(client) as Arc<dyn IdentityProvider>)
        }
        None => {
            warn!("IDENTITY_URL not set, onboarding metadata is left to the client");
            None
        }
    };

    let state = AppState::new(services, identity, db, config);
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Cronara API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
