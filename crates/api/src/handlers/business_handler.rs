//! Business settings handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppError, AppResult, ErrorResponse};
use domain::{messages, BusinessResponse, BusinessSettingsForm};

use super::profile_handler::PrincipalQuery;
use crate::extractors::{AppJson, AppQuery};
use crate::state::AppState;

/// Settings page load result. `business` holds empty fields when the owner
/// has none yet.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSettingsResponse {
    pub owner_id: i64,
    pub business: BusinessResponse,
}

/// Settings page save. `businessId` is the id returned by the last load or
/// save; without it a new business is created.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveBusinessBody {
    pub owner_id: Option<i64>,
    pub business_id: Option<Uuid>,
    #[schema(example = "Clínica Sonrisas")]
    pub business_name: String,
    #[schema(example = "Odontología general y estética")]
    pub description: String,
    #[schema(example = "https://cdn.example.com/logo.png")]
    pub logo_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedBusinessResponse {
    pub business: BusinessResponse,
}

/// Create business routes
pub fn business_routes() -> Router<AppState> {
    Router::new().route("/business", get(get_business).put(save_business))
}

/// Load the business settings of the signed-in owner
#[utoipa::path(
    get,
    path = "/business",
    tag = "Business",
    params(("authUserId" = String, Query, description = "Principal id")),
    responses(
        (status = 200, description = "Owner id and business", body = BusinessSettingsResponse),
        (status = 400, description = "Unknown user or store failure", body = ErrorResponse)
    )
)]
pub async fn get_business(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PrincipalQuery>,
) -> AppResult<Json<BusinessSettingsResponse>> {
    let settings = state.services.businesses.get(&query.auth_user_id).await?;

    Ok(Json(BusinessSettingsResponse {
        owner_id: settings.owner_id,
        business: settings
            .business
            .map(BusinessResponse::from)
            .unwrap_or_default(),
    }))
}

/// Create or update the owner's business
#[utoipa::path(
    put,
    path = "/business",
    tag = "Business",
    request_body = SaveBusinessBody,
    responses(
        (status = 200, description = "Saved business", body = SavedBusinessResponse),
        (status = 400, description = "Invalid fields or unknown business", body = ErrorResponse)
    )
)]
pub async fn save_business(
    State(state): State<AppState>,
    AppJson(body): AppJson<SaveBusinessBody>,
) -> AppResult<Json<SavedBusinessResponse>> {
    let owner_id = body
        .owner_id
        .ok_or_else(|| AppError::validation(messages::MISSING_SESSION_USER))?;

    let form = BusinessSettingsForm {
        business_name: body.business_name,
        description: body.description,
        logo_url: body.logo_url,
    };

    let business = state
        .services
        .businesses
        .upsert(owner_id, body.business_id, form)
        .await?;

    Ok(Json(SavedBusinessResponse {
        business: business.into(),
    }))
}
