//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::business_handler::{
    BusinessSettingsResponse, SaveBusinessBody, SavedBusinessResponse,
};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::onboarding_handler::{OnboardingBody, SuccessResponse};
use crate::handlers::profile_handler::{ProfileResponse, UpdateProfileBody};
use crate::handlers::staff_handler::{AddStaffBody, StaffCreatedResponse, StaffListResponse};
use common::ErrorResponse;
use domain::{BusinessResponse, Profile, StaffResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::onboarding_handler::submit_onboarding,
        crate::handlers::profile_handler::get_profile,
        crate::handlers::profile_handler::update_profile,
        crate::handlers::business_handler::get_business,
        crate::handlers::business_handler::save_business,
        crate::handlers::staff_handler::list_staff,
        crate::handlers::staff_handler::add_staff,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            OnboardingBody,
            SuccessResponse,
            ErrorResponse,
            UpdateProfileBody,
            ProfileResponse,
            Profile,
            SaveBusinessBody,
            BusinessSettingsResponse,
            SavedBusinessResponse,
            BusinessResponse,
            AddStaffBody,
            StaffListResponse,
            StaffCreatedResponse,
            StaffResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Onboarding", description = "First-run profile and role reconciliation"),
        (name = "Profile", description = "Contact details of the signed-in user"),
        (name = "Business", description = "Business settings for owners"),
        (name = "Staff", description = "Business staff roster"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
