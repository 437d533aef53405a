//! Repository layer for data access.

mod business_repository;
pub mod entities;
#[cfg(any(test, feature = "test-utils"))]
mod memory;
mod role_repository;
mod staff_repository;
mod user_repository;

pub use business_repository::{BusinessRepository, BusinessStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use staff_repository::{StaffRepository, StaffStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use business_repository::MockBusinessRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryStore;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use staff_repository::MockStaffRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// SQL of every statement a mock connection has executed so far.
#[cfg(test)]
pub(crate) fn logged_sql(db: &sea_orm::DatabaseConnection) -> Vec<String> {
    db.clone()
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
        .collect()
}
