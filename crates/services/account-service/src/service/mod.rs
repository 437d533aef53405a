//! Service layer - account use cases over the repositories.

mod business_service;
mod container;
mod onboarding_service;
mod profile_service;
mod staff_service;

pub use business_service::{BusinessManager, BusinessService, BusinessSettingsSession};
pub use container::AccountServices;
pub use onboarding_service::{OnboardingManager, OnboardingService};
pub use profile_service::{ProfileManager, ProfileService};
pub use staff_service::{StaffManager, StaffService};
