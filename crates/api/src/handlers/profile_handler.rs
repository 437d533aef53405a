//! Profile handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::{AppResult, ErrorResponse};
use domain::{Profile, ProfileFields};

use super::onboarding_handler::SuccessResponse;
use crate::extractors::{AppJson, AppQuery};
use crate::state::AppState;

/// Query identifying the signed-in principal
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrincipalQuery {
    pub auth_user_id: String,
}

/// Profile edit submission
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileBody {
    #[schema(example = "2b7e1516-28ae-4d2a-a6f7-15889a09cf4f")]
    pub auth_user_id: String,
    #[schema(example = "Ana López")]
    pub full_name: String,
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[schema(example = "555 123 4567")]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// Get the signed-in principal's contact details
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    params(("authUserId" = String, Query, description = "Principal id")),
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 400, description = "Missing id or unknown profile", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PrincipalQuery>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state.services.profiles.get(&query.auth_user_id).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// Edit the signed-in principal's contact details
#[utoipa::path(
    put,
    path = "/profile",
    tag = "Profile",
    request_body = UpdateProfileBody,
    responses(
        (status = 200, description = "Profile updated", body = SuccessResponse),
        (status = 400, description = "Invalid fields or unknown profile", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(body): AppJson<UpdateProfileBody>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .profiles
        .update(
            &body.auth_user_id,
            ProfileFields::new(body.full_name, body.email, body.phone),
        )
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
