//! In-memory repositories for tests.
//!
//! One `InMemoryStore` backs all four repository traits, with the same
//! uniqueness rules the migrations put on the real tables.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Business, BusinessFields, NewStaffMember, ProfileFields, StaffMember, UserRecord};

use super::{BusinessRepository, RoleRepository, StaffRepository, UserRepository};

#[derive(Default)]
struct Tables {
    next_user_id: i64,
    users: Vec<UserRecord>,
    owners: Vec<i64>,
    clients: Vec<i64>,
    businesses: Vec<Business>,
    staff: Vec<StaffMember>,
}

/// Shared in-memory tables. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::store("in-memory store poisoned"))
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.tables.lock().map(|t| t.users.clone()).unwrap_or_default()
    }

    pub fn owners(&self) -> Vec<i64> {
        self.tables.lock().map(|t| t.owners.clone()).unwrap_or_default()
    }

    pub fn clients(&self) -> Vec<i64> {
        self.tables.lock().map(|t| t.clients.clone()).unwrap_or_default()
    }

    pub fn businesses(&self) -> Vec<Business> {
        self.tables
            .lock()
            .map(|t| t.businesses.clone())
            .unwrap_or_default()
    }

    pub fn staff(&self) -> Vec<StaffMember> {
        self.tables.lock().map(|t| t.staff.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_principal(&self, principal_id: &str) -> AppResult<Option<UserRecord>> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|u| u.principal_id == principal_id)
            .cloned())
    }

    async fn upsert_by_principal(
        &self,
        principal_id: &str,
        fields: &ProfileFields,
    ) -> AppResult<UserRecord> {
        let mut tables = self.lock()?;
        let now = Utc::now();

        if let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.principal_id == principal_id)
        {
            user.name = fields.full_name.clone();
            user.email = fields.email.clone();
            user.phone = fields.phone.clone();
            user.updated_at = now;
            return Ok(user.clone());
        }

        tables.next_user_id += 1;
        let user = UserRecord {
            id: tables.next_user_id,
            principal_id: principal_id.to_string(),
            name: fields.full_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update_by_principal(
        &self,
        principal_id: &str,
        fields: &ProfileFields,
    ) -> AppResult<u64> {
        let mut tables = self.lock()?;
        let mut rows = 0;
        for user in tables
            .users
            .iter_mut()
            .filter(|u| u.principal_id == principal_id)
        {
            user.name = fields.full_name.clone();
            user.email = fields.email.clone();
            user.phone = fields.phone.clone();
            user.updated_at = Utc::now();
            rows += 1;
        }
        Ok(rows)
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn ensure_owner(&self, user_id: i64) -> AppResult<bool> {
        let mut tables = self.lock()?;
        if tables.owners.contains(&user_id) {
            return Ok(false);
        }
        tables.owners.push(user_id);
        Ok(true)
    }

    async fn ensure_client(&self, user_id: i64) -> AppResult<bool> {
        let mut tables = self.lock()?;
        if tables.clients.contains(&user_id) {
            return Ok(false);
        }
        tables.clients.push(user_id);
        Ok(true)
    }
}

#[async_trait]
impl BusinessRepository for InMemoryStore {
    async fn find_by_owner(&self, owner_id: i64) -> AppResult<Option<Business>> {
        let tables = self.lock()?;
        Ok(tables
            .businesses
            .iter()
            .find(|b| b.owner_id == owner_id)
            .cloned())
    }

    async fn insert(&self, owner_id: i64, fields: &BusinessFields) -> AppResult<Business> {
        let mut tables = self.lock()?;
        let now = Utc::now();
        let business = Business {
            id: Uuid::new_v4(),
            owner_id,
            name: fields.name.clone(),
            description: fields.description.clone(),
            logo_url: fields.logo_url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.businesses.push(business.clone());
        Ok(business)
    }

    async fn update(&self, id: Uuid, fields: &BusinessFields) -> AppResult<Option<Business>> {
        let mut tables = self.lock()?;
        Ok(tables.businesses.iter_mut().find(|b| b.id == id).map(|b| {
            b.name = fields.name.clone();
            b.description = fields.description.clone();
            b.logo_url = fields.logo_url.clone();
            b.updated_at = Utc::now();
            b.clone()
        }))
    }
}

#[async_trait]
impl StaffRepository for InMemoryStore {
    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<StaffMember>> {
        let tables = self.lock()?;
        Ok(tables
            .staff
            .iter()
            .filter(|s| s.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, business_id: Uuid, member: &NewStaffMember) -> AppResult<StaffMember> {
        let mut tables = self.lock()?;
        let staff = StaffMember {
            id: Uuid::new_v4(),
            business_id,
            name: member.full_name.clone(),
            email: member.email.clone(),
            cargo: member.cargo.clone(),
            phone: member.phone.clone(),
            created_at: Utc::now(),
        };
        tables.staff.push(staff.clone());
        Ok(staff)
    }
}
