//! Per-match player statistics.

use crate::{
    model::match_player::{MatchPlayerDto, MatchPlayerRequestDto},
    server::{error::AppError, model::required},
};

/// Statistics of one player in one match, keyed by the (match, player) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayer {
    pub match_id: i32,
    pub player_id: i32,
    pub play_time: i32,
    pub goals: i32,
    pub assists: i32,
    pub cards: i32,
}

impl MatchPlayer {
    pub fn from_entity(entity: entity::match_player::Model) -> Self {
        Self {
            match_id: entity.match_id,
            player_id: entity.player_id,
            play_time: entity.play_time,
            goals: entity.goals,
            assists: entity.assists,
            cards: entity.cards,
        }
    }

    pub fn into_dto(self) -> MatchPlayerDto {
        MatchPlayerDto {
            match_id: self.match_id,
            player_id: self.player_id,
            play_time: self.play_time,
            goals: self.goals,
            assists: self.assists,
            cards: self.cards,
        }
    }
}

/// Statistics for a (match, player) pair, used for both insert and update.
///
/// Statistics omitted from the request default to `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayerParams {
    pub match_id: i32,
    pub player_id: i32,
    pub play_time: i32,
    pub goals: i32,
    pub assists: i32,
    pub cards: i32,
}

impl MatchPlayerParams {
    pub fn from_dto(dto: MatchPlayerRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            match_id: required(dto.match_id, "matchId")?,
            player_id: required(dto.player_id, "playerId")?,
            play_time: dto.play_time.unwrap_or(0),
            goals: dto.goals.unwrap_or(0),
            assists: dto.assists.unwrap_or(0),
            cards: dto.cards.unwrap_or(0),
        })
    }
}
