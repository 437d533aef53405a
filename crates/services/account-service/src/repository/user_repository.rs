//! User repository keyed by the identity provider's principal id.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{ProfileFields, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The principal id is the only key used to locate or create a row.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the profile row for a principal
    async fn find_by_principal(&self, principal_id: &str) -> AppResult<Option<UserRecord>>;

    /// Insert the row for a principal, or overwrite its contact fields if it exists
    async fn upsert_by_principal(
        &self,
        principal_id: &str,
        fields: &ProfileFields,
    ) -> AppResult<UserRecord>;

    /// Overwrite the contact fields of an existing row; returns rows affected
    async fn update_by_principal(&self, principal_id: &str, fields: &ProfileFields)
        -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_principal(&self, principal_id: &str) -> AppResult<Option<UserRecord>> {
        let result = UserEntity::find()
            .filter(user::Column::UserId.eq(principal_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserRecord::from))
    }

    async fn upsert_by_principal(
        &self,
        principal_id: &str,
        fields: &ProfileFields,
    ) -> AppResult<UserRecord> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(principal_id.to_string()),
            name: Set(fields.full_name.clone()),
            email: Set(fields.email.clone()),
            phone: Set(fields.phone.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // Single statement keyed by the unique user_id column
        let model = UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::UserId)
                    .update_columns([
                        user::Column::Name,
                        user::Column::Email,
                        user::Column::Phone,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(UserRecord::from(model))
    }

    async fn update_by_principal(
        &self,
        principal_id: &str,
        fields: &ProfileFields,
    ) -> AppResult<u64> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(fields.full_name.clone()))
            .col_expr(user::Column::Email, Expr::value(fields.email.clone()))
            .col_expr(user::Column::Phone, Expr::value(fields.phone.clone()))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::UserId.eq(principal_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
