//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! profiles and roles, businesses, staff, the onboarding submission, and the
//! user-facing messages shared by every layer.

pub mod business;
pub mod constants;
pub mod error;
pub mod messages;
pub mod onboarding;
pub mod staff;
pub mod user;
pub mod validation;

pub use business::{Business, BusinessFields, BusinessResponse, BusinessSettings, BusinessSettingsForm};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use onboarding::{Onboarding, OnboardingOutcome, OnboardingRequest};
pub use staff::{NewStaffMember, StaffMember, StaffResponse};
pub use user::{require_principal, Profile, ProfileFields, Role, UserRecord};
