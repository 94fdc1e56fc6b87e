//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from entity models at the repository boundary with
//! `from_entity` and leave the server as DTOs through `into_dto`. Parameter types
//! are built from request DTOs with `from_dto` after the DTO passed validation.

pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
pub mod user;

use crate::server::error::AppError;

/// Unwraps a field that `validator` already checked with `required`.
///
/// # Arguments
/// - `value` - Field value from the request DTO
/// - `field` - Wire name of the field, used in the error message
///
/// # Returns
/// - `Ok(T)` - Field is present
/// - `Err(AppError::Validation)` - Field is missing
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(vec![format!("{}: required", field)]))
}
