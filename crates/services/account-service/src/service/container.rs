//! Service container - wires repositories into the account services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    BusinessManager, BusinessService, OnboardingManager, OnboardingService, ProfileManager,
    ProfileService, StaffManager, StaffService,
};
use crate::repository::{
    BusinessRepository, BusinessStore, RoleRepository, RoleStore, StaffRepository, StaffStore,
    UserRepository, UserStore,
};

/// All account services, shared behind `Arc`s.
#[derive(Clone)]
pub struct AccountServices {
    pub onboarding: Arc<dyn OnboardingService>,
    pub profiles: Arc<dyn ProfileService>,
    pub businesses: Arc<dyn BusinessService>,
    pub staff: Arc<dyn StaffService>,
}

impl AccountServices {
    /// Build the services on SeaORM-backed repositories
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::from_repositories(
            Arc::new(UserStore::new(db.clone())),
            Arc::new(RoleStore::new(db.clone())),
            Arc::new(BusinessStore::new(db.clone())),
            Arc::new(StaffStore::new(db)),
        )
    }

    /// Build the services on any repository implementations
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        businesses: Arc<dyn BusinessRepository>,
        staff: Arc<dyn StaffRepository>,
    ) -> Self {
        Self {
            onboarding: Arc::new(OnboardingManager::new(
                users.clone(),
                roles,
                businesses.clone(),
            )),
            profiles: Arc::new(ProfileManager::new(users.clone())),
            businesses: Arc::new(BusinessManager::new(users.clone(), businesses.clone())),
            staff: Arc::new(StaffManager::new(users, businesses, staff)),
        }
    }

    /// Build the services on one shared in-memory store
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory(store: &crate::repository::InMemoryStore) -> Self {
        Self::from_repositories(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }
}
