use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username is unknown or the password does not match the stored hash.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request to a protected endpoint carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, expiry or format is invalid, or its user no longer exists.
    ///
    /// # Fields
    /// - Reason the token was rejected, logged at debug level only
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token subject does not match the user it was validated against.
    #[error("Token subject does not match user")]
    SubjectMismatch,

    /// Password hashing or stored hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential and token failures become 401 Unauthorized with a fixed message so that
/// clients cannot distinguish an unknown user from a wrong password. A failing hash
/// operation is a server fault and becomes 503 Service Unavailable.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken(_) | Self::SubjectMismatch => {
                tracing::debug!("Rejected request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Authentication required")),
                )
                    .into_response()
            }
            Self::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new("Service unavailable")),
                )
                    .into_response()
            }
        }
    }
}
