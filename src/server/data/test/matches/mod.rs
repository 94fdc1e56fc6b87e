use crate::server::{
    data::matches::MatchRepository,
    model::matches::{CreateMatchParams, UpdateMatchParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::matches::MatchFactory};

mod delete_by_team;
mod find_by_date;
mod find_by_team;
mod update;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, day).unwrap()
}
