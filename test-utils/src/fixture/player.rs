//! Player fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::player;

pub const DEFAULT_FIRSTNAME: &str = "Giorgos";

pub const DEFAULT_LASTNAME: &str = "Papadopoulos";

/// Creates a player entity model with default values.
///
/// The player belongs to the team with id `1`, matching `fixture::team::entity()`.
pub fn entity() -> player::Model {
    player::Model {
        id: 1,
        firstname: DEFAULT_FIRSTNAME.to_string(),
        lastname: DEFAULT_LASTNAME.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1998, 3, 21),
        nationality: Some("Greek".to_string()),
        monetary_value: Some(250_000),
        player_role: Some("Forward".to_string()),
        team_id: Some(1),
    }
}
