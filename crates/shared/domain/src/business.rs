//! Business profile entity and the settings form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{validate_business_description, validate_business_name, validate_logo_url};

/// One business profile per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    /// Owner (= user) id
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns written on business insert and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessFields {
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

impl BusinessFields {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        logo_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: non_blank(description),
            logo_url: non_blank(logo_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Business settings form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BusinessSettingsForm {
    #[validate(custom(function = "validate_business_name"))]
    pub business_name: String,
    #[validate(custom(function = "validate_business_description"))]
    pub description: String,
    #[validate(custom(function = "validate_logo_url"))]
    pub logo_url: String,
}

impl BusinessSettingsForm {
    /// Validate the form and turn it into the columns to write.
    pub fn into_fields(self) -> DomainResult<BusinessFields> {
        self.validate()?;
        Ok(BusinessFields::new(
            self.business_name.trim(),
            Some(self.description),
            Some(self.logo_url),
        ))
    }
}

/// What the settings page loads: the owner id and the business, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessSettings {
    pub owner_id: i64,
    pub business: Option<Business>,
}

/// Business as shown on the settings page (safe to return to client)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    /// Business id, absent until the first save
    pub id: Option<Uuid>,
    /// Business name
    pub name: String,
    /// Short description
    pub description: String,
    /// Logo URL
    pub logo_url: String,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: Some(business.id),
            name: business.name,
            description: business.description.unwrap_or_default(),
            logo_url: business.logo_url.unwrap_or_default(),
        }
    }
}
