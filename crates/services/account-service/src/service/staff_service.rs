//! Staff roster service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppResult, StoreStep};
use domain::{messages, require_principal, NewStaffMember, StaffMember};

use crate::repository::{BusinessRepository, StaffRepository, UserRepository};

/// Staff service trait for dependency injection.
#[async_trait]
pub trait StaffService: Send + Sync {
    /// List a business's staff in the order they were added
    async fn list(&self, business_id: Uuid) -> AppResult<Vec<StaffMember>>;

    /// Validate and add a staff member to a business
    async fn add(&self, business_id: Uuid, member: NewStaffMember) -> AppResult<StaffMember>;

    /// Staff of the business owned by a principal; empty when the principal
    /// has no profile or no business yet
    async fn roster_for_principal(&self, principal_id: &str) -> AppResult<Vec<StaffMember>>;
}

/// Concrete implementation of StaffService using repositories.
pub struct StaffManager {
    users: Arc<dyn UserRepository>,
    businesses: Arc<dyn BusinessRepository>,
    staff: Arc<dyn StaffRepository>,
}

impl StaffManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        businesses: Arc<dyn BusinessRepository>,
        staff: Arc<dyn StaffRepository>,
    ) -> Self {
        Self {
            users,
            businesses,
            staff,
        }
    }
}

#[async_trait]
impl StaffService for StaffManager {
    async fn list(&self, business_id: Uuid) -> AppResult<Vec<StaffMember>> {
        self.staff
            .list_by_business(business_id)
            .await
            .store_step(messages::STAFF_FETCH_FAILED)
    }

    async fn add(&self, business_id: Uuid, member: NewStaffMember) -> AppResult<StaffMember> {
        let member = member.validated()?;

        let staff = self
            .staff
            .insert(business_id, &member)
            .await
            .store_step(messages::STAFF_SAVE_FAILED)?;

        info!(business_id = %business_id, staff_id = %staff.id, "Staff member added");
        Ok(staff)
    }

    async fn roster_for_principal(&self, principal_id: &str) -> AppResult<Vec<StaffMember>> {
        let principal_id = require_principal(principal_id)?;

        let Some(user) = self
            .users
            .find_by_principal(principal_id)
            .await
            .store_step(messages::STAFF_FETCH_FAILED)?
        else {
            debug!(principal_id, "No profile yet, empty roster");
            return Ok(Vec::new());
        };

        let Some(business) = self
            .businesses
            .find_by_owner(user.id)
            .await
            .store_step(messages::STAFF_FETCH_FAILED)?
        else {
            debug!(principal_id, "No business yet, empty roster");
            return Ok(Vec::new());
        };

        self.list(business.id).await
    }
}
