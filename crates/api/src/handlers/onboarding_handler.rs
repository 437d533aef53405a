//! Onboarding handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;
use utoipa::ToSchema;

use common::{AppError, AppResult, ErrorResponse};
use domain::{messages, OnboardingRequest, ProfileFields};

use crate::clients::{sync_metadata, IdentityMetadata};
use crate::extractors::AppJson;
use crate::middleware::handle_onboarding_panic;
use crate::state::AppState;

/// Onboarding form submission
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingBody {
    /// Principal id issued by the identity provider
    #[schema(example = "2b7e1516-28ae-4d2a-a6f7-15889a09cf4f")]
    pub auth_user_id: String,
    /// `owner` or `client`
    #[schema(example = "owner")]
    pub role: String,
    #[schema(example = "Ana López")]
    pub full_name: String,
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[schema(example = "555 123 4567")]
    pub phone: String,
    /// Owners only; a blank name skips the business
    pub business_name: Option<String>,
    pub business_description: Option<String>,
}

impl From<OnboardingBody> for OnboardingRequest {
    fn from(body: OnboardingBody) -> Self {
        Self {
            principal_id: body.auth_user_id,
            role: body.role,
            profile: ProfileFields::new(body.full_name, body.email, body.phone),
            business_name: body.business_name,
            business_description: body.business_description,
        }
    }
}

/// Plain acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Create onboarding routes
pub fn onboarding_routes() -> Router<AppState> {
    Router::new().route(
        "/onboarding",
        post(submit_onboarding).layer(CatchPanicLayer::custom(handle_onboarding_panic)),
    )
}

/// Reconcile a principal's profile and role, then mark onboarding complete
#[utoipa::path(
    post,
    path = "/onboarding",
    tag = "Onboarding",
    request_body = OnboardingBody,
    responses(
        (status = 200, description = "Onboarding reconciled", body = SuccessResponse),
        (status = 400, description = "Invalid submission or store failure", body = ErrorResponse),
        (status = 500, description = "Metadata sync failed", body = ErrorResponse)
    )
)]
pub async fn submit_onboarding(
    State(state): State<AppState>,
    AppJson(body): AppJson<OnboardingBody>,
) -> AppResult<Json<SuccessResponse>> {
    let principal_id = body.auth_user_id.trim().to_string();
    let outcome = state.services.onboarding.reconcile(body.into()).await?;

    // Store writes are not repeated here; only the metadata write is retried
    if let Some(identity) = &state.identity {
        let metadata = IdentityMetadata::completed(outcome.role);
        sync_metadata(
            identity.as_ref(),
            &principal_id,
            &metadata,
            state.config.identity.retry,
        )
        .await
        .map_err(|e| {
            error!(principal_id = %principal_id, error = %e, "Identity metadata sync gave up");
            AppError::unexpected(messages::ONBOARDING_FAILED)
        })?;
    }

    Ok(Json(SuccessResponse::ok()))
}
