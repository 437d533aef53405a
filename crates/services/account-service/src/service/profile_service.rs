//! Profile service - read and edit a principal's contact details.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppError, AppResult, StoreStep};
use domain::{messages, require_principal, Profile, ProfileFields};

use crate::repository::UserRepository;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Get the contact details stored for a principal
    async fn get(&self, principal_id: &str) -> AppResult<Profile>;

    /// Overwrite the contact details of an existing profile. Never creates one.
    async fn update(&self, principal_id: &str, fields: ProfileFields) -> AppResult<()>;
}

/// Concrete implementation of ProfileService using repository.
pub struct ProfileManager {
    users: Arc<dyn UserRepository>,
}

impl ProfileManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ProfileService for ProfileManager {
    async fn get(&self, principal_id: &str) -> AppResult<Profile> {
        let principal_id = require_principal(principal_id)?;

        let user = self
            .users
            .find_by_principal(principal_id)
            .await
            .store_step(messages::PROFILE_FETCH_FAILED)?
            .ok_or_else(|| AppError::not_found(messages::PROFILE_FETCH_FAILED))?;

        debug!(principal_id, user_id = user.id, "Profile loaded");
        Ok(Profile::from(user))
    }

    async fn update(&self, principal_id: &str, fields: ProfileFields) -> AppResult<()> {
        let principal_id = require_principal(principal_id)?;
        let fields = fields.validate()?;

        let rows = self
            .users
            .update_by_principal(principal_id, &fields)
            .await
            .store_step(messages::PROFILE_UPDATE_FAILED)?;

        if rows == 0 {
            return Err(AppError::not_found(messages::PROFILE_UPDATE_FAILED));
        }

        info!(principal_id, "Profile updated");
        Ok(())
    }
}
