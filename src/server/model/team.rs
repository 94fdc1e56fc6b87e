//! Team domain models and parameters.

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{error::AppError, model::required},
};

/// Football team with its venue and staff.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
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

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Team` - The converted team domain model
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            team_name: entity.team_name,
            foundation_year: entity.foundation_year,
            city_name: entity.city_name,
            stadium_name: entity.stadium_name,
            coach_firstname: entity.coach_firstname,
            coach_lastname: entity.coach_lastname,
            president_firstname: entity.president_firstname,
            president_lastname: entity.president_lastname,
        }
    }

    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            team_name: self.team_name,
            foundation_year: self.foundation_year,
            city_name: self.city_name,
            stadium_name: self.stadium_name,
            coach_firstname: self.coach_firstname,
            coach_lastname: self.coach_lastname,
            president_firstname: self.president_firstname,
            president_lastname: self.president_lastname,
        }
    }
}

/// Mutable team attributes, used for creation and as the new values on update.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeamParams {
    pub team_name: String,
    pub foundation_year: Option<i32>,
    pub city_name: String,
    pub stadium_name: String,
    pub coach_firstname: Option<String>,
    pub coach_lastname: Option<String>,
    pub president_firstname: Option<String>,
    pub president_lastname: Option<String>,
}

impl CreateTeamParams {
    /// Converts a validated creation DTO into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateTeamParams)` - All required fields present
    /// - `Err(AppError::Validation)` - A required field is missing
    pub fn from_dto(dto: CreateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            team_name: required(dto.team_name, "teamName")?,
            foundation_year: dto.foundation_year,
            city_name: required(dto.city_name, "cityName")?,
            stadium_name: required(dto.stadium_name, "stadiumName")?,
            coach_firstname: dto.coach_firstname,
            coach_lastname: dto.coach_lastname,
            president_firstname: dto.president_firstname,
            president_lastname: dto.president_lastname,
        })
    }
}

/// Parameters replacing every mutable field of an existing team.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub changes: CreateTeamParams,
}

impl UpdateTeamParams {
    /// Converts a validated update DTO into parameters for the team at `id`.
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            changes: CreateTeamParams {
                team_name: required(dto.team_name, "teamName")?,
                foundation_year: dto.foundation_year,
                city_name: required(dto.city_name, "cityName")?,
                stadium_name: required(dto.stadium_name, "stadiumName")?,
                coach_firstname: dto.coach_firstname,
                coach_lastname: dto.coach_lastname,
                president_firstname: dto.president_firstname,
                president_lastname: dto.president_lastname,
            },
        })
    }
}
