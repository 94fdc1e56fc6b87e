//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Reference checks**: Verifying that linked teams, matches and players exist
//! - **Transaction Management**: Running every mutation inside one database transaction
//! - **Domain Errors**: Translating absent rows into `AppError::NotFound`

pub mod auth;
pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;


use crate::server::error::AppError;

/// Builds a `NotFound` error and logs it as a domain failure.
pub(crate) fn not_found(message: String) -> AppError {
    tracing::warn!("{}", message);
    AppError::NotFound(message)
}
