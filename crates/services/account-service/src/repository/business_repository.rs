//! Business repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use super::entities::business::{self, ActiveModel, Entity as BusinessEntity};
use common::{AppError, AppResult};
use domain::{Business, BusinessFields};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Business repository trait for dependency injection.
///
/// Nothing at the store level keeps an owner to a single business, so
/// lookups by owner return the oldest row.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find the business owned by a user
    async fn find_by_owner(&self, owner_id: i64) -> AppResult<Option<Business>>;

    /// Insert a new business for an owner
    async fn insert(&self, owner_id: i64, fields: &BusinessFields) -> AppResult<Business>;

    /// Update a business by its own id; `None` when no such row exists
    async fn update(&self, id: Uuid, fields: &BusinessFields) -> AppResult<Option<Business>>;
}

/// Concrete implementation of BusinessRepository
pub struct BusinessStore {
    db: DatabaseConnection,
}

impl BusinessStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for BusinessStore {
    async fn find_by_owner(&self, owner_id: i64) -> AppResult<Option<Business>> {
        let result = BusinessEntity::find()
            .filter(business::Column::OwnerId.eq(owner_id))
            .order_by_asc(business::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Business::from))
    }

    async fn insert(&self, owner_id: i64, fields: &BusinessFields) -> AppResult<Business> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
            logo_url: Set(fields.logo_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Business::from(model))
    }

    async fn update(&self, id: Uuid, fields: &BusinessFields) -> AppResult<Option<Business>> {
        let active_model = ActiveModel {
            id: Set(id),
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
            logo_url: Set(fields.logo_url.clone()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(Business::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }
}
