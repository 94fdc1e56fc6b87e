//! MatchPlayer fixtures for creating in-memory test data.

use entity::match_player;

/// Creates a statistics record for player `1` in match `1`.
pub fn entity() -> match_player::Model {
    match_player::Model {
        match_id: 1,
        player_id: 1,
        play_time: 90,
        goals: 1,
        assists: 0,
        cards: 1,
    }
}
