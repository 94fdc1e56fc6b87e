//! Team fixtures for creating in-memory test data.

use entity::team;

/// Default test team name.
pub const DEFAULT_TEAM_NAME: &str = "Aris";

/// Default test city name.
pub const DEFAULT_CITY_NAME: &str = "Thessaloniki";

/// Default test stadium name.
pub const DEFAULT_STADIUM_NAME: &str = "Kleanthis Vikelidis";

/// Default foundation year.
pub const DEFAULT_FOUNDATION_YEAR: i32 = 1914;

/// Creates a team entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - team_name: `"Aris"`
/// - foundation_year: `Some(1914)`
/// - city_name: `"Thessaloniki"`
/// - stadium_name: `"Kleanthis Vikelidis"`
/// - coach: `Some("Akis")` / `Some("Mantzios")`
/// - president: `None`
pub fn entity() -> team::Model {
    team::Model {
        id: 1,
        team_name: DEFAULT_TEAM_NAME.to_string(),
        foundation_year: Some(DEFAULT_FOUNDATION_YEAR),
        city_name: DEFAULT_CITY_NAME.to_string(),
        stadium_name: DEFAULT_STADIUM_NAME.to_string(),
        coach_firstname: Some("Akis".to_string()),
        coach_lastname: Some("Mantzios".to_string()),
        president_firstname: None,
        president_lastname: None,
    }
}
