use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub team_name: String,
    pub foundation_year: Option<i32>,
    pub city_name: String,
    pub stadium_name: String,
    pub coach_firstname: Option<String>,
    pub coach_lastname: Option<String>,
    pub president_firstname: Option<String>,
    pub president_lastname: Option<String>,
}

/// Team creation payload.
///
/// The short names `name`, `city`, `stadium` and `year` are accepted as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    #[serde(alias = "name")]
    #[validate(required, length(min = 2, max = 50))]
    pub team_name: Option<String>,
    #[serde(alias = "year")]
    pub foundation_year: Option<i32>,
    #[serde(alias = "city")]
    #[validate(required, length(min = 2, max = 30))]
    pub city_name: Option<String>,
    #[serde(alias = "stadium")]
    #[validate(required, length(min = 2, max = 50))]
    pub stadium_name: Option<String>,
    #[validate(length(min = 2, max = 20))]
    pub coach_firstname: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub coach_lastname: Option<String>,
    #[validate(length(min = 2, max = 20))]
    pub president_firstname: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub president_lastname: Option<String>,
}

/// Team update payload; `id` must repeat the id from the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    pub id: Option<i32>,
    #[serde(alias = "name")]
    #[validate(required, length(min = 2, max = 50))]
    pub team_name: Option<String>,
    #[serde(alias = "year")]
    pub foundation_year: Option<i32>,
    #[serde(alias = "city")]
    #[validate(required, length(min = 2, max = 30))]
    pub city_name: Option<String>,
    #[serde(alias = "stadium")]
    #[validate(required, length(min = 2, max = 50))]
    pub stadium_name: Option<String>,
    #[validate(length(min = 2, max = 20))]
    pub coach_firstname: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub coach_lastname: Option<String>,
    #[validate(length(min = 2, max = 20))]
    pub president_firstname: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub president_lastname: Option<String>,
}
