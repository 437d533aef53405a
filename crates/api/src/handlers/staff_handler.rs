//! Staff roster handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppError, AppResult, ErrorResponse};
use domain::{messages, NewStaffMember, StaffResponse};

use crate::extractors::{AppJson, AppQuery};
use crate::state::AppState;

/// Either a business id, or the principal whose business to list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffQuery {
    pub business_id: Option<Uuid>,
    pub auth_user_id: Option<String>,
}

/// Staff form submission
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddStaffBody {
    pub business_id: Option<Uuid>,
    #[schema(example = "Laura Martínez")]
    pub full_name: String,
    #[schema(example = "laura@empresa.com")]
    pub email: String,
    /// Job title shown on the roster
    #[schema(example = "Recepcionista")]
    pub role: String,
    #[schema(example = "55 1234 5678")]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffListResponse {
    pub staff: Vec<StaffResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffCreatedResponse {
    pub staff: StaffResponse,
}

/// Create staff routes
pub fn staff_routes() -> Router<AppState> {
    Router::new().route("/staff", get(list_staff).post(add_staff))
}

/// List staff in the order they were added
#[utoipa::path(
    get,
    path = "/staff",
    tag = "Staff",
    params(
        ("businessId" = Option<Uuid>, Query, description = "Business id"),
        ("authUserId" = Option<String>, Query, description = "Principal id, used when no business id is given")
    ),
    responses(
        (status = 200, description = "Staff roster", body = StaffListResponse),
        (status = 400, description = "No business or principal given", body = ErrorResponse)
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<StaffQuery>,
) -> AppResult<Json<StaffListResponse>> {
    let staff = match (query.business_id, query.auth_user_id) {
        (Some(business_id), _) => state.services.staff.list(business_id).await?,
        (None, Some(principal_id)) => {
            state
                .services
                .staff
                .roster_for_principal(&principal_id)
                .await?
        }
        (None, None) => return Err(AppError::validation(messages::STAFF_BUSINESS_REQUIRED)),
    };

    Ok(Json(StaffListResponse {
        staff: staff.into_iter().map(StaffResponse::from).collect(),
    }))
}

/// Add a staff member to a business
#[utoipa::path(
    post,
    path = "/staff",
    tag = "Staff",
    request_body = AddStaffBody,
    responses(
        (status = 201, description = "Staff member added", body = StaffCreatedResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    )
)]
pub async fn add_staff(
    State(state): State<AppState>,
    AppJson(body): AppJson<AddStaffBody>,
) -> AppResult<(StatusCode, Json<StaffCreatedResponse>)> {
    let business_id = body
        .business_id
        .ok_or_else(|| AppError::validation(messages::STAFF_BUSINESS_REQUIRED))?;

    let member = NewStaffMember {
        full_name: body.full_name,
        email: body.email,
        cargo: body.role,
        phone: body.phone,
    };
    let staff = state.services.staff.add(business_id, member).await?;

    Ok((
        StatusCode::CREATED,
        Json(StaffCreatedResponse {
            staff: staff.into(),
        }),
    ))
}
