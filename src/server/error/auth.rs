use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or type validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Unknown email or wrong password on login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempt by a banned account.
    #[error("User {0} is banned")]
    AccountBanned(i32),

    /// Caller's role is outside the allow-set of the route.
    ///
    /// # Fields
    /// - ID of the caller
    /// - Description of the denied action, logged but not returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Attempt to modify or delete a super admin account.
    #[error("User {0} attempted to modify protected super admin {1}")]
    ProtectedAccount(i32, i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `AccountBanned` / `AccessDenied` / `ProtectedAccount` → 403 Forbidden
///
/// Details are logged at debug level while the client receives a short, fixed message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing token"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccountBanned(_) => (StatusCode::FORBIDDEN, "Account is banned"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::ProtectedAccount(_, _) => {
                (StatusCode::FORBIDDEN, "Super admin accounts cannot be modified")
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
