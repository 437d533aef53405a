//! Onboarding reconciliation.
//!
//! Brings the user, owner/client and business rows in line with what a
//! principal submitted on the onboarding form. Every write is an upsert, so
//! submitting the same form again converges on the same rows.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppError, AppResult, StoreStep};
use domain::{messages, BusinessFields, Onboarding, OnboardingOutcome, OnboardingRequest, Role};

use crate::repository::{BusinessRepository, RoleRepository, UserRepository};

/// Onboarding service trait for dependency injection.
#[async_trait]
pub trait OnboardingService: Send + Sync {
    /// Validate the submission, then upsert the user, assign the role and,
    /// for owners with a business name, upsert the business.
    async fn reconcile(&self, request: OnboardingRequest) -> AppResult<OnboardingOutcome>;
}

/// Concrete implementation of OnboardingService using repositories.
pub struct OnboardingManager {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    businesses: Arc<dyn BusinessRepository>,
}

impl OnboardingManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        businesses: Arc<dyn BusinessRepository>,
    ) -> Self {
        Self {
            users,
            roles,
            businesses,
        }
    }

    async fn reconcile_owner(&self, user_id: i64, business: Option<BusinessFields>) -> AppResult<()> {
        let created = self
            .roles
            .ensure_owner(user_id)
            .await
            .store_step(messages::OWNER_SAVE_FAILED)?;
        debug!(user_id, created, "Owner row ensured");

        let Some(fields) = business else {
            debug!(user_id, "No business name submitted, skipping business");
            return Ok(());
        };

        let existing = self
            .businesses
            .find_by_owner(user_id)
            .await
            .store_step(messages::BUSINESS_LOOKUP_FAILED)?;

        match existing {
            Some(business) => {
                // An omitted description leaves the stored one in place
                let fields = BusinessFields {
                    description: fields.description.or(business.description),
                    ..fields
                };
                self.businesses
                    .update(business.id, &fields)
                    .await
                    .store_step(messages::BUSINESS_UPDATE_FAILED)?
                    .ok_or_else(|| AppError::store(messages::BUSINESS_UPDATE_FAILED))?;
                debug!(user_id, business_id = %business.id, "Business updated");
            }
            None => {
                let business = self
                    .businesses
                    .insert(user_id, &fields)
                    .await
                    .store_step(messages::BUSINESS_SAVE_FAILED)?;
                debug!(user_id, business_id = %business.id, "Business created");
            }
        }

        Ok(())
    }

    async fn reconcile_client(&self, user_id: i64) -> AppResult<()> {
        let created = self
            .roles
            .ensure_client(user_id)
            .await
            .store_step(messages::CLIENT_SAVE_FAILED)?;
        debug!(user_id, created, "Client row ensured");
        Ok(())
    }
}

#[async_trait]
impl OnboardingService for OnboardingManager {
    async fn reconcile(&self, request: OnboardingRequest) -> AppResult<OnboardingOutcome> {
        let Onboarding {
            principal_id,
            role,
            profile,
            business,
        } = request.validate()?;

        let user = self
            .users
            .upsert_by_principal(&principal_id, &profile)
            .await
            .store_step(messages::USER_SAVE_FAILED)?;
        debug!(principal_id = %principal_id, user_id = user.id, "User upserted");

        match role {
            Role::Owner => self.reconcile_owner(user.id, business).await?,
            Role::Client => self.reconcile_client(user.id).await?,
        }

        info!(principal_id = %principal_id, user_id = user.id, role = %role, "Onboarding reconciled");

        Ok(OnboardingOutcome {
            user_id: user.id,
            role,
        })
    }
}
