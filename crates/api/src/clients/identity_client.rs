//! HTTP client for the identity provider's admin API.
//!
//! Authentication itself happens upstream; this client only records
//! key/value metadata on a principal once onboarding has been reconciled.

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use common::{AppError, AppResult};
use domain::{require_principal, Role};

use crate::config::RetryPolicy;

/// Metadata stored on a principal after onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentityMetadata {
    pub onboarding_completed: bool,
    pub role: Role,
}

impl IdentityMetadata {
    pub fn completed(role: Role) -> Self {
        Self {
            onboarding_completed: true,
            role,
        }
    }
}

/// Writes metadata on a principal.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn update_metadata(&self, principal_id: &str, metadata: &IdentityMetadata)
        -> AppResult<()>;
}

/// Admin API client.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: Url,
    service_key: SecretString,
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient")
            .field("base_url", &self.base_url.as_str())
            .field("service_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl IdentityClient {
    /// Fails when `base_url` is not an absolute URL that can carry a path.
    pub fn new(base_url: &str, service_key: SecretString) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::identity(format!("invalid identity URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::identity("identity URL cannot carry a path"));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            service_key,
        })
    }

    /// Admin endpoint of one principal. The id is pushed as a single
    /// percent-encoded segment so it cannot leave `/admin/users/`.
    fn user_url(&self, principal_id: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::identity("identity URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["auth", "v1", "admin", "users", principal_id]);
        Ok(url)
    }
}

#[derive(Serialize)]
struct UpdateUserBody<'a> {
    user_metadata: &'a IdentityMetadata,
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    #[instrument(skip(self, metadata), fields(role = %metadata.role))]
    async fn update_metadata(
        &self,
        principal_id: &str,
        metadata: &IdentityMetadata,
    ) -> AppResult<()> {
        let key = self.service_key.expose_secret();

        self.client
            .put(self.user_url(principal_id)?)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&UpdateUserBody {
                user_metadata: metadata,
            })
            .send()
            .await
            .map_err(|e| AppError::identity(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::identity(e.to_string()))?;

        debug!("Identity metadata updated");
        Ok(())
    }
}

/// Write metadata, retrying failed attempts with linear backoff.
///
/// Returns the last error once `policy.max_attempts` attempts have failed.
pub async fn sync_metadata(
    provider: &dyn IdentityProvider,
    principal_id: &str,
    metadata: &IdentityMetadata,
    policy: RetryPolicy,
) -> AppResult<()> {
    let principal_id = require_principal(principal_id)?;
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match provider.update_metadata(principal_id, metadata).await {
            Ok(()) => return Ok(()),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(
                    principal_id,
                    attempt,
                    max_attempts,
                    error = %e,
                    "Identity metadata write failed, retrying"
                );
                tokio::time::sleep(policy.delay * attempt).await;
                attempt += 1;
            }
        }
    }
}
