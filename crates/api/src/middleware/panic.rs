//! Turns a handler panic into the API's generic 500 response.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use common::AppError;
use domain::messages;

type PanicPayload = Box<dyn Any + Send + 'static>;

fn respond(err: PanicPayload, message: &'static str) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = detail, "Request handler panicked");
    AppError::unexpected(message).into_response()
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(err: PanicPayload) -> Response {
    respond(err, messages::REQUEST_FAILED)
}

/// Same as [`handle_panic`], with the onboarding form's own message.
pub fn handle_onboarding_panic(err: PanicPayload) -> Response {
    respond(err, messages::ONBOARDING_FAILED)
}
