//! JSON body and query extractors.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use common::AppError;
use domain::messages;

/// JSON body whose rejection is a `400 {"error": ...}`. The parser's own
/// text is logged, never returned.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| {
                warn!(rejection = %e.body_text(), "Rejected request body");
                AppError::validation(messages::MALFORMED_REQUEST)
            })?;

        Ok(AppJson(value))
    }
}

/// Query string whose rejection is a `400 {"error": ...}`.
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| {
                warn!(rejection = %e.body_text(), "Rejected query string");
                AppError::validation(messages::MALFORMED_REQUEST)
            })?;

        Ok(AppQuery(value))
    }
}
