use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name_prefix;
mod update;

fn params(team_name: &str) -> CreateTeamParams {
    CreateTeamParams {
        team_name: team_name.to_string(),
        foundation_year: Some(1914),
        city_name: "Thessaloniki".to_string(),
        stadium_name: "Kleanthis Vikelidis".to_string(),
        coach_firstname: None,
        coach_lastname: None,
        president_firstname: Some("Thodoris".to_string()),
        president_lastname: Some("Karipidis".to_string()),
    }
}
