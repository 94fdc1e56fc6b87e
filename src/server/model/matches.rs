//! Match domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::matches::{CreateMatchDto, MatchDto, UpdateMatchDto},
    server::{error::AppError, model::required},
};

/// Match between a host and a guest team with its final score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub match_date: NaiveDate,
    pub goals_host: i32,
    pub goals_guest: i32,
    pub host_team_id: i32,
    pub guest_team_id: i32,
}

impl Match {
    pub fn from_entity(entity: entity::matches::Model) -> Self {
        Self {
            id: entity.id,
            match_date: entity.match_date,
            goals_host: entity.goals_host,
            goals_guest: entity.goals_guest,
            host_team_id: entity.host_team_id,
            guest_team_id: entity.guest_team_id,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            match_date: self.match_date,
            goals_host: self.goals_host,
            goals_guest: self.goals_guest,
            host_team_id: self.host_team_id,
            guest_team_id: self.guest_team_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMatchParams {
    pub match_date: NaiveDate,
    pub goals_host: i32,
    pub goals_guest: i32,
    pub host_team_id: i32,
    pub guest_team_id: i32,
}

impl CreateMatchParams {
    pub fn from_dto(dto: CreateMatchDto) -> Result<Self, AppError> {
        Ok(Self {
            match_date: required(dto.match_date, "matchDate")?,
            goals_host: required(dto.goals_host, "goalsHost")?,
            goals_guest: required(dto.goals_guest, "goalsGuest")?,
            host_team_id: required(dto.host_team_id, "hostTeamId")?,
            guest_team_id: required(dto.guest_team_id, "guestTeamId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMatchParams {
    pub id: i32,
    pub changes: CreateMatchParams,
}

impl UpdateMatchParams {
    pub fn from_dto(id: i32, dto: UpdateMatchDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            changes: CreateMatchParams {
                match_date: required(dto.match_date, "matchDate")?,
                goals_host: required(dto.goals_host, "goalsHost")?,
                goals_guest: required(dto.goals_guest, "goalsGuest")?,
                host_team_id: required(dto.host_team_id, "hostTeamId")?,
                guest_team_id: required(dto.guest_team_id, "guestTeamId")?,
            },
        })
    }
}
