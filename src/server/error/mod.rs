//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Every handler returns `Result<_, AppError>`. Responses are limited to
/// 400, 401, 403, 404 and 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body failed `validator` rules. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// Password hashing failure.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// JWT encoding failure. Decoding failures surface as `AuthError::InvalidToken`.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Filesystem error while storing uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or oversized multipart body. Status comes from the rejection.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `ValidationErr`
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - every other variant, logged server-side
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - Variable - `MultipartErr`, 400 for malformed bodies and 413 past the route's body limit
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::ValidationErr(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(format!("Validation failed: {}", errors))),
            )
                .into_response(),
            Self::MultipartErr(err) => (
                err.status(),
                Json(ErrorDto::new(format!("Invalid multipart body: {}", err.body_text()))),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
