//! Staff roster entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{
    validate_staff_email, validate_staff_name, validate_staff_phone, validate_staff_role,
};

/// A person on a business's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub email: String,
    /// Free-form job title ("Recepcionista", "Médico", ...)
    pub cargo: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Staff-add form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct NewStaffMember {
    #[validate(custom(function = "validate_staff_name"))]
    pub full_name: String,
    #[validate(custom(function = "validate_staff_email"))]
    pub email: String,
    #[validate(custom(function = "validate_staff_role"))]
    pub cargo: String,
    #[validate(custom(function = "validate_staff_phone"))]
    pub phone: String,
}

impl NewStaffMember {
    /// Validate and return the trimmed form.
    pub fn validated(self) -> DomainResult<Self> {
        self.validate()?;
        Ok(Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            cargo: self.cargo.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Staff member as listed in the sidebar (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StaffResponse {
    /// Staff member id
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Job title
    pub cargo: String,
    /// Contact phone
    pub phone: String,
}

impl From<StaffMember> for StaffResponse {
    fn from(member: StaffMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            cargo: member.cargo,
            phone: member.phone,
        }
    }
}
