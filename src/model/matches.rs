use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub match_date: NaiveDate,
    pub goals_host: i32,
    pub goals_guest: i32,
    pub host_team_id: i32,
    pub guest_team_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    #[validate(required)]
    pub match_date: Option<NaiveDate>,
    #[validate(required, range(min = 0))]
    pub goals_host: Option<i32>,
    #[validate(required, range(min = 0))]
    pub goals_guest: Option<i32>,
    #[validate(required)]
    pub host_team_id: Option<i32>,
    #[validate(required)]
    pub guest_team_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchDto {
    pub id: Option<i32>,
    #[validate(required)]
    pub match_date: Option<NaiveDate>,
    #[validate(required, range(min = 0))]
    pub goals_host: Option<i32>,
    #[validate(required, range(min = 0))]
    pub goals_guest: Option<i32>,
    #[validate(required)]
    pub host_team_id: Option<i32>,
    #[validate(required)]
    pub guest_team_id: Option<i32>,
}
