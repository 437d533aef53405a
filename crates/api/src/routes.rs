//! Route configuration.

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    business_routes, health_routes, onboarding_routes, profile_routes, staff_routes,
};
use crate::middleware::handle_panic;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(onboarding_routes())
        .merge(profile_routes())
        .merge(business_routes())
        .merge(staff_routes())
        .with_state(state);

    apply_layers(router)
}

/// Request tracing and panic recovery, outermost last.
pub fn apply_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
