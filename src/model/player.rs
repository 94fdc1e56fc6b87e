use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub monetary_value: Option<i32>,
    pub player_role: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    #[validate(required, length(min = 2, max = 20))]
    pub firstname: Option<String>,
    #[validate(required, length(min = 2, max = 30))]
    pub lastname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 2, max = 30))]
    pub nationality: Option<String>,
    #[validate(range(min = 0))]
    pub monetary_value: Option<i32>,
    #[validate(length(max = 20))]
    pub player_role: Option<String>,
    #[validate(required)]
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    pub id: Option<i32>,
    #[validate(required, length(min = 2, max = 20))]
    pub firstname: Option<String>,
    #[validate(required, length(min = 2, max = 30))]
    pub lastname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 2, max = 30))]
    pub nationality: Option<String>,
    #[validate(range(min = 0))]
    pub monetary_value: Option<i32>,
    #[validate(length(max = 20))]
    pub player_role: Option<String>,
    #[validate(required)]
    pub team_id: Option<i32>,
}
