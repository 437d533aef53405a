//! API configuration.

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use account_service_lib::config::AccountServiceConfig;
use common::{env_or, DatabaseConfig};

/// API configuration. The listen address comes from the CLI.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Identity provider used for onboarding metadata
    pub identity: IdentityConfig,
}

/// Identity provider settings.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the provider; metadata sync is off when unset
    pub url: Option<String>,
    /// Service-role key for the admin API
    pub service_key: SecretString,
    /// Retry policy for metadata writes
    pub retry: RetryPolicy,
}

/// Linear backoff: attempt `n` waits `n * delay` before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(200),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: SecretString::from(String::new()),
            retry: RetryPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let retry = RetryPolicy::default();

        Self {
            database: AccountServiceConfig::from_env().database,
            identity: IdentityConfig {
                url: env::var("IDENTITY_URL")
                    .ok()
                    .map(|url| url.trim_end_matches('/').to_string())
                    .filter(|url| !url.is_empty()),
                service_key: SecretString::from(
                    env::var("IDENTITY_SERVICE_KEY").unwrap_or_default(),
                ),
                retry: RetryPolicy {
                    max_attempts: env_or("IDENTITY_MAX_ATTEMPTS", retry.max_attempts).max(1),
                    delay: Duration::from_millis(env_or(
                        "IDENTITY_RETRY_DELAY_MS",
                        retry.delay.as_millis() as u64,
                    )),
                },
            },
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}
