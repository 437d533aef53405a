//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Role for principals who run a business
pub const ROLE_OWNER: &str = "owner";

/// Role for principals who book appointments
pub const ROLE_CLIENT: &str = "client";

// =============================================================================
// Business
// =============================================================================

/// Logo assigned to businesses created during onboarding
pub const DEFAULT_BUSINESS_LOGO_URL: &str = "/assets/cronaraLogo.webp";

/// Minimum business description length on the settings form
pub const MIN_BUSINESS_DESCRIPTION_LENGTH: usize = 10;

// =============================================================================
// Staff
// =============================================================================

/// Minimum number of characters for a staff contact phone
pub const MIN_STAFF_PHONE_LENGTH: usize = 8;

// =============================================================================
// Identity provider metadata
// =============================================================================

/// Metadata key flagging that onboarding finished
pub const METADATA_ONBOARDING_COMPLETED: &str = "onboarding_completed";

/// Metadata key holding the chosen role
pub const METADATA_ROLE: &str = "role";
