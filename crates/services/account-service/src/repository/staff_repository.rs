//! Staff roster repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::staff::{self, ActiveModel, Entity as StaffEntity};
use common::{AppError, AppResult};
use domain::{NewStaffMember, StaffMember};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Staff repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// List a business's staff, oldest first
    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<StaffMember>>;

    /// Add a staff member to a business
    async fn insert(&self, business_id: Uuid, member: &NewStaffMember) -> AppResult<StaffMember>;
}

/// Concrete implementation of StaffRepository
pub struct StaffStore {
    db: DatabaseConnection,
}

impl StaffStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for StaffStore {
    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<StaffMember>> {
        let models = StaffEntity::find()
            .filter(staff::Column::BusinessId.eq(business_id))
            .order_by_asc(staff::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(StaffMember::from).collect())
    }

    async fn insert(&self, business_id: Uuid, member: &NewStaffMember) -> AppResult<StaffMember> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            business_id: Set(business_id),
            name: Set(member.full_name.clone()),
            email: Set(member.email.clone()),
            cargo: Set(member.cargo.clone()),
            phone: Set(member.phone.clone()),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(StaffMember::from(model))
    }
}
