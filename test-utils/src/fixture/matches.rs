//! Match fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::matches;

/// Creates a match entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - match_date: `2024-10-04`
/// - score: `2` - `1`
/// - host_team_id / guest_team_id: `1` / `2`
pub fn entity() -> matches::Model {
    matches::Model {
        id: 1,
        match_date: NaiveDate::from_ymd_opt(2024, 10, 4).unwrap_or_default(),
        goals_host: 2,
        goals_guest: 1,
        host_team_id: 1,
        guest_team_id: 2,
    }
}
