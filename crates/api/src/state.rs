//! Application state for dependency injection.

use std::sync::Arc;

use account_service_lib::infra::Database;
use account_service_lib::AccountServices;

use crate::clients::IdentityProvider;
use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: AccountServices,
    /// `None` when no identity provider is configured
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub database: Database,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        services: AccountServices,
        identity: Option<Arc<dyn IdentityProvider>>,
        database: Database,
        config: ApiConfig,
    ) -> Self {
        Self {
            services,
            identity,
            database,
            config,
        }
    }
}
