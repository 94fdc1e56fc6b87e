use crate::server::{data::match_player::MatchPlayerRepository, model::match_player::MatchPlayerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_match;
mod update;

fn params(match_id: i32, player_id: i32) -> MatchPlayerParams {
    MatchPlayerParams {
        match_id,
        player_id,
        play_time: 75,
        goals: 1,
        assists: 2,
        cards: 0,
    }
}
