//! Unified error handling for the services and the HTTP API.
//!
//! Every failure reaches the client as `{"error": "<message>"}`. Validation,
//! lookup and store failures answer 400; anything unexpected answers 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{messages, DomainError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed input; never reaches the store
    #[error("{0}")]
    Validation(String),

    /// A required row does not exist
    #[error("{0}")]
    NotFound(String),

    /// The store reported a failure or returned no row where one was required
    #[error("{0}")]
    Store(String),

    /// Raw store error that no service step has put into context yet
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    /// The identity provider rejected or failed a metadata write
    #[error("Identity provider error: {0}")]
    Identity(String),

    /// Anything not anticipated by the request flow
    #[error("{0}")]
    Unexpected(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(_) => "STORE_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Identity(_) => "IDENTITY_ERROR",
            AppError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::Store(_) => {
                StatusCode::BAD_REQUEST
            }
            #[cfg(feature = "database")]
            AppError::Database(_) => StatusCode::BAD_REQUEST,
            AppError::Identity(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Store(msg)
            | AppError::Unexpected(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                messages::STORE_FAILED.to_string()
            }
            AppError::Identity(msg) => {
                tracing::error!("Identity provider error: {}", msg);
                messages::REQUEST_FAILED.to_string()
            }
        }
    }

    /// Turn a raw store failure into a `Store` error for one step.
    ///
    /// The store's own message is kept when it has one; otherwise the
    /// step's fallback is used. Errors that already carry meaning pass
    /// through unchanged.
    pub fn in_store_step(self, fallback: &str) -> Self {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!(error = ?e, step = fallback, "Store operation failed");
                AppError::Store(store_message(&e).unwrap_or_else(|| fallback.to_string()))
            }
            other => other,
        }
    }
}

/// Message reported by the store, if the error has one worth showing.
#[cfg(feature = "database")]
fn store_message(err: &sea_orm::DbErr) -> Option<String> {
    use sea_orm::DbErr;

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotInserted | DbErr::RecordNotUpdated => None,
        DbErr::ConnectionAcquire(_) => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", message);
        } else {
            tracing::warn!(code = self.code(), "{}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Internal(msg) => AppError::Unexpected(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait tagging a store call with its step's fallback message
pub trait StoreStep<T> {
    fn store_step(self, fallback: &str) -> AppResult<T>;
}

impl<T> StoreStep<T> for AppResult<T> {
    fn store_step(self, fallback: &str) -> AppResult<T> {
        self.map_err(|e| e.in_store_step(fallback))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }

    pub fn identity(msg: impl Into<String>) -> Self {
        AppError::Identity(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        AppError::Unexpected(msg.into())
    }
}
