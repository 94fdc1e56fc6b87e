//! Player domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    server::{error::AppError, model::required},
};

/// Player registered with at most one team.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub monetary_value: Option<i32>,
    pub player_role: Option<String>,
    /// Team the player belongs to, `None` after the team was deleted.
    pub team_id: Option<i32>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            date_of_birth: entity.date_of_birth,
            nationality: entity.nationality,
            monetary_value: entity.monetary_value,
            player_role: entity.player_role,
            team_id: entity.team_id,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            firstname: self.firstname,
            lastname: self.lastname,
            date_of_birth: self.date_of_birth,
            nationality: self.nationality,
            monetary_value: self.monetary_value,
            player_role: self.player_role,
            team_id: self.team_id,
        }
    }
}

/// Player attributes for creation, also used as the new values on update.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlayerParams {
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub monetary_value: Option<i32>,
    pub player_role: Option<String>,
    pub team_id: i32,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            firstname: required(dto.firstname, "firstname")?,
            lastname: required(dto.lastname, "lastname")?,
            date_of_birth: dto.date_of_birth,
            nationality: dto.nationality,
            monetary_value: dto.monetary_value,
            player_role: dto.player_role,
            team_id: required(dto.team_id, "teamId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub changes: CreatePlayerParams,
}

impl UpdatePlayerParams {
    pub fn from_dto(id: i32, dto: UpdatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            changes: CreatePlayerParams {
                firstname: required(dto.firstname, "firstname")?,
                lastname: required(dto.lastname, "lastname")?,
                date_of_birth: dto.date_of_birth,
                nationality: dto.nationality,
                monetary_value: dto.monetary_value,
                player_role: dto.player_role,
                team_id: required(dto.team_id, "teamId")?,
            },
        })
    }
}
