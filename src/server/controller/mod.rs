//! HTTP request handlers.
//!
//! Handlers authenticate through the `AuthUser` extractor, convert DTOs into
//! parameter types, call a service and convert the returned domain model back into a
//! DTO. Reads and `/login` are public; every mutating entity endpoint requires a
//! bearer token.

pub mod auth;
pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;

#[cfg(test)]
mod test;

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body whose rejection is reported as an `ErrorDto`.
///
/// Malformed JSON, a wrong content type or a field of the wrong type all become
/// `AppError::BadRequest` (400).
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Search endpoints answer an empty result with 400 instead of 404.
pub(crate) fn search_miss(err: AppError) -> AppError {
    match err {
        AppError::NotFound(message) => AppError::BadRequest(message),
        other => other,
    }
}

/// Checks that the id repeated in a PUT body equals the one in the path.
///
/// A body without an id counts as a mismatch.
pub(crate) fn ensure_same_id(path_id: i32, body_id: Option<i32>) -> Result<(), AppError> {
    if body_id != Some(path_id) {
        tracing::warn!("Path id {} does not match body id {:?}", path_id, body_id);
        return Err(AppError::IdMismatch);
    }

    Ok(())
}
