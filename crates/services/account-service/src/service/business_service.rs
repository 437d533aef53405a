//! Business settings service.
//!
//! Reads and saves the business an owner manages from the settings page.
//! `BusinessSettingsSession` keeps the ids resolved by `load` so repeated
//! saves from the same page address the same row.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppError, AppResult, StoreStep};
use domain::{
    messages, require_principal, Business, BusinessSettings, BusinessSettingsForm,
};

use crate::repository::{BusinessRepository, UserRepository};

/// Business settings service trait for dependency injection.
#[async_trait]
pub trait BusinessService: Send + Sync {
    /// Resolve the principal's owner id and current business, if any
    async fn get(&self, principal_id: &str) -> AppResult<BusinessSettings>;

    /// Update the business with `business_id`, or create one for the owner
    /// when no id is known yet
    async fn upsert(
        &self,
        owner_id: i64,
        business_id: Option<Uuid>,
        form: BusinessSettingsForm,
    ) -> AppResult<Business>;
}

/// Concrete implementation of BusinessService using repositories.
pub struct BusinessManager {
    users: Arc<dyn UserRepository>,
    businesses: Arc<dyn BusinessRepository>,
}

impl BusinessManager {
    pub fn new(users: Arc<dyn UserRepository>, businesses: Arc<dyn BusinessRepository>) -> Self {
        Self { users, businesses }
    }
}

#[async_trait]
impl BusinessService for BusinessManager {
    async fn get(&self, principal_id: &str) -> AppResult<BusinessSettings> {
        let principal_id = require_principal(principal_id)?;

        let user = self
            .users
            .find_by_principal(principal_id)
            .await
            .store_step(messages::SETTINGS_USER_FAILED)?
            .ok_or_else(|| AppError::not_found(messages::SETTINGS_USER_FAILED))?;

        let business = self
            .businesses
            .find_by_owner(user.id)
            .await
            .store_step(messages::SETTINGS_BUSINESS_FAILED)?;

        debug!(
            principal_id,
            owner_id = user.id,
            has_business = business.is_some(),
            "Business settings loaded"
        );

        Ok(BusinessSettings {
            owner_id: user.id,
            business,
        })
    }

    async fn upsert(
        &self,
        owner_id: i64,
        business_id: Option<Uuid>,
        form: BusinessSettingsForm,
    ) -> AppResult<Business> {
        let fields = form.into_fields()?;

        let business = match business_id {
            Some(id) => self
                .businesses
                .update(id, &fields)
                .await
                .store_step(messages::BUSINESS_UPDATE_FAILED)?
                .ok_or_else(|| AppError::not_found(messages::BUSINESS_UPDATE_FAILED))?,
            None => self
                .businesses
                .insert(owner_id, &fields)
                .await
                .store_step(messages::BUSINESS_SAVE_FAILED)?,
        };

        info!(owner_id, business_id = %business.id, "Business settings saved");
        Ok(business)
    }
}

/// Settings page state for one caller. Not shared between callers.
pub struct BusinessSettingsSession {
    service: Arc<dyn BusinessService>,
    owner_id: Option<i64>,
    business_id: Option<Uuid>,
}

impl BusinessSettingsSession {
    pub fn new(service: Arc<dyn BusinessService>) -> Self {
        Self {
            service,
            owner_id: None,
            business_id: None,
        }
    }

    /// Load the principal's settings and remember the resolved ids.
    pub async fn load(&mut self, principal_id: &str) -> AppResult<BusinessSettings> {
        let settings = self.service.get(principal_id).await?;
        self.owner_id = Some(settings.owner_id);
        self.business_id = settings.business.as_ref().map(|b| b.id);
        Ok(settings)
    }

    /// Save the form against the remembered business, keeping the id of a
    /// freshly inserted row for the next save.
    pub async fn save(&mut self, form: BusinessSettingsForm) -> AppResult<Business> {
        let owner_id = self
            .owner_id
            .ok_or_else(|| AppError::validation(messages::MISSING_SESSION_USER))?;

        let business = self.service.upsert(owner_id, self.business_id, form).await?;
        self.business_id = Some(business.id);
        Ok(business)
    }

    pub fn owner_id(&self) -> Option<i64> {
        self.owner_id
    }

    pub fn business_id(&self) -> Option<Uuid> {
        self.business_id
    }
}
