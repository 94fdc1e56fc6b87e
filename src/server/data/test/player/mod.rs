use crate::server::{data::player::PlayerRepository, model::player::CreatePlayerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod detach_team;
mod find_by_lastname_prefix;
mod find_by_team;

fn params(lastname: &str, team_id: i32) -> CreatePlayerParams {
    CreatePlayerParams {
        firstname: "Giorgos".to_string(),
        lastname: lastname.to_string(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1999, 1, 30),
        nationality: Some("Greek".to_string()),
        monetary_value: Some(500_000),
        player_role: Some("Goalkeeper".to_string()),
        team_id,
    }
}
