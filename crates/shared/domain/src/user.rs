//! User profile entity and role types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_CLIENT, ROLE_OWNER};
use crate::error::{DomainError, DomainResult};
use crate::messages;
use crate::validation::{is_present, is_valid_email, is_valid_principal};

/// Role chosen by a principal during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Client,
}

impl Role {
    /// Parse a submitted role; anything other than `owner` or `client` is rejected.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.trim() {
            ROLE_OWNER => Ok(Role::Owner),
            ROLE_CLIENT => Ok(Role::Client),
            _ => Err(DomainError::validation(messages::ROLE_REQUIRED)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => ROLE_OWNER,
            Role::Client => ROLE_CLIENT,
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Role::Owner)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile shadow row for a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-generated id, shared with the owner row
    pub id: i64,
    /// Identity provider principal id (unique)
    pub principal_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable contact fields submitted by onboarding and the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileFields {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Check presence and email shape, returning the trimmed fields.
    pub fn validate(self) -> DomainResult<Self> {
        if !is_present(&self.full_name) || !is_present(&self.email) || !is_present(&self.phone) {
            return Err(DomainError::validation(messages::CONTACT_FIELDS_REQUIRED));
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::validation(messages::INVALID_EMAIL));
        }

        Ok(Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Check a principal id before touching the store or the identity provider.
///
/// Identity provider ids are UUIDs; anything else is rejected so the id can
/// be used safely as a path segment of the admin API.
pub fn require_principal(principal_id: &str) -> DomainResult<&str> {
    let principal_id = principal_id.trim();
    if principal_id.is_empty() {
        return Err(DomainError::validation(messages::MISSING_PRINCIPAL));
    }
    if !is_valid_principal(principal_id) {
        return Err(DomainError::validation(messages::INVALID_PRINCIPAL));
    }
    Ok(principal_id)
}

/// Profile as shown to the principal (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

impl From<UserRecord> for Profile {
    fn from(user: UserRecord) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}
