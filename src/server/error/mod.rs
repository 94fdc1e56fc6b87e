//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure failures use `#[from]` for
/// automatic conversion while the domain variants carry a client-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 503 Service Unavailable with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced resource does not exist.
    ///
    /// Results in 404 Not Found. Search endpoints answer a miss with 400 instead,
    /// see `controller::search_miss`.
    #[error("{0}")]
    NotFound(String),

    /// A record with the same unique key is already stored.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    AlreadyExists(String),

    /// Request payload failed field validation.
    ///
    /// Results in 400 Bad Request with one message per offending field.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Malformed request input such as an unparsable query parameter.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Identifier in the request path differs from the one in the request body.
    ///
    /// Results in 401 Unauthorized.
    #[error("Path identifier does not match request body")]
    IdMismatch,

    /// The store accepted an insert but the new row could not be read back.
    ///
    /// Results in 503 Service Unavailable.
    #[error("{0}")]
    InsertFailed(String),

    /// Internal server error with custom message.
    ///
    /// Results in 503 Service Unavailable. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Flattens `validator` output into one `"field: message"` entry per failed rule.
///
/// Entries are sorted so responses are stable regardless of hash map ordering.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        AppError::Validation(messages)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyExists`, `Validation` and `BadRequest`
/// - 401 Unauthorized - For `IdMismatch`
/// - 404 Not Found - For `NotFound`
/// - 503 Service Unavailable - For `InsertFailed` and all infrastructure errors
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::AlreadyExists(msg) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_details("Validation failed", details)),
            )
                .into_response(),
            Self::IdMismatch => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(Self::IdMismatch.to_string())),
            )
                .into_response(),
            Self::InsertFailed(msg) => {
                tracing::error!("Insert failed: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorDto::new(msg))).into_response()
            }
            err => ServiceUnavailable(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 503 Service Unavailable response.
///
/// This struct logs the error message and returns a generic message to the client to
/// avoid leaking implementation details. Used as a fallback for errors that don't have
/// specific HTTP response mappings.
pub struct ServiceUnavailable<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for ServiceUnavailable<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto::new("Service unavailable")),
        )
            .into_response()
    }
}
