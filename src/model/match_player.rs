use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerDto {
    pub match_id: i32,
    pub player_id: i32,
    pub play_time: i32,
    pub goals: i32,
    pub assists: i32,
    pub cards: i32,
}

/// Statistics payload for both insert and update.
///
/// On update the ids must repeat the ones from the request path. Omitted
/// statistics are stored as `0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerRequestDto {
    #[validate(required)]
    pub match_id: Option<i32>,
    #[validate(required)]
    pub player_id: Option<i32>,
    #[validate(range(min = 0))]
    pub play_time: Option<i32>,
    #[validate(range(min = 0))]
    pub goals: Option<i32>,
    #[validate(range(min = 0))]
    pub assists: Option<i32>,
    #[validate(range(min = 0))]
    pub cards: Option<i32>,
}
