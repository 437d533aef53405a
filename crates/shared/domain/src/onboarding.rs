//! Onboarding submission and its validated form.

use serde::{Deserialize, Serialize};

use crate::business::BusinessFields;
use crate::constants::DEFAULT_BUSINESS_LOGO_URL;
use crate::error::DomainResult;
use crate::user::{require_principal, ProfileFields, Role};
use crate::validation::is_present;

/// Raw onboarding submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub principal_id: String,
    pub role: String,
    pub profile: ProfileFields,
    pub business_name: Option<String>,
    pub business_description: Option<String>,
}

/// Onboarding submission after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Onboarding {
    pub principal_id: String,
    pub role: Role,
    pub profile: ProfileFields,
    /// Only set for owners who submitted a business name
    pub business: Option<BusinessFields>,
}

impl OnboardingRequest {
    /// Check the principal, then the contact fields, then the role.
    pub fn validate(self) -> DomainResult<Onboarding> {
        let principal_id = require_principal(&self.principal_id)?.to_string();
        let profile = self.profile.validate()?;
        let role = Role::parse(&self.role)?;

        let business = match (role, self.business_name) {
            (Role::Owner, Some(name)) if is_present(&name) => Some(BusinessFields::new(
                name.trim(),
                self.business_description,
                Some(DEFAULT_BUSINESS_LOGO_URL.to_string()),
            )),
            _ => None,
        };

        Ok(Onboarding {
            principal_id,
            role,
            profile,
            business,
        })
    }
}

/// Result of a successful reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingOutcome {
    /// Id of the user row that was created or updated
    pub user_id: i64,
    pub role: Role,
}
