//! Account service configuration.

use common::{env_or, DatabaseConfig, DEFAULT_DATABASE_URL};

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    pub database: DatabaseConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", defaults.min_connections),
            },
        }
    }
}
