//! Owner and client marker rows.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, NotSet, Set};

use super::entities::client::{self, Entity as ClientEntity};
use super::entities::owner::{self, Entity as OwnerEntity};
use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
///
/// Both operations are idempotent: they insert at most one row per user and
/// report whether this call was the one that inserted it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Create the owner row (id = user id) unless it already exists
    async fn ensure_owner(&self, user_id: i64) -> AppResult<bool>;

    /// Create the client row for a user unless it already exists
    async fn ensure_client(&self, user_id: i64) -> AppResult<bool>;
}

/// Concrete implementation of RoleRepository
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn ensure_owner(&self, user_id: i64) -> AppResult<bool> {
        let active_model = owner::ActiveModel {
            id: Set(user_id),
            created_at: Set(Utc::now()),
        };

        let inserted = OwnerEntity::insert(active_model)
            .on_conflict(OnConflict::column(owner::Column::Id).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await;

        inserted_row(inserted)
    }

    async fn ensure_client(&self, user_id: i64) -> AppResult<bool> {
        let active_model = client::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        };

        let inserted = ClientEntity::insert(active_model)
            .on_conflict(OnConflict::column(client::Column::UserId).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await;

        inserted_row(inserted)
    }
}

/// A conflicting insert is not a failure, it just inserted nothing.
fn inserted_row(result: Result<u64, DbErr>) -> AppResult<bool> {
    match result {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::logged_sql;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[test]
    fn test_inserted_row_mapping() {
        assert!(matches!(inserted_row(Ok(1)), Ok(true)));
        assert!(matches!(inserted_row(Ok(0)), Ok(false)));
        assert!(matches!(inserted_row(Err(DbErr::RecordNotInserted)), Ok(false)));
        assert!(matches!(
            inserted_row(Err(DbErr::Custom("boom".to_string()))),
            Err(AppError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_ensure_owner_conflict_inserts_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let store = RoleStore::new(db.clone());

        assert!(store.ensure_owner(3).await.unwrap());
        assert!(!store.ensure_owner(3).await.unwrap());

        let sql = logged_sql(&db);
        assert_eq!(sql.len(), 2);
        assert!(sql[0].starts_with(r#"INSERT INTO "owner""#));
        assert!(sql[0].contains(r#"ON CONFLICT ("id") DO NOTHING"#));
        assert!(!sql[0].contains("RETURNING"));
    }

    #[tokio::test]
    async fn test_ensure_client_keyed_by_user_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();
        let store = RoleStore::new(db.clone());

        assert!(!store.ensure_client(3).await.unwrap());

        let sql = logged_sql(&db);
        assert!(sql[0].starts_with(r#"INSERT INTO "client""#));
        assert!(sql[0].contains(r#"ON CONFLICT ("user_id") DO NOTHING"#));
    }
}
