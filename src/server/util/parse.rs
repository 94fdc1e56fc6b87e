use chrono::NaiveDate;

use crate::server::error::AppError;

/// Parses a match date given as `ddMMyyyy` without separators.
///
/// # Arguments
/// - `value` - Date string such as `04102024`
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed calendar date
/// - `Err(AppError::BadRequest)` - Value is not eight digits or not a real date
pub fn parse_compact_date(value: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid date '{}', expected ddMMyyyy", value));

    if value.len() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%d%m%Y").map_err(|_| invalid())
}
