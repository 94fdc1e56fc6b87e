use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        matches::MatchDto,
        player::PlayerDto,
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{
        controller::{ensure_same_id, search_miss, JsonBody},
        error::AppError,
        middleware::auth::AuthUser,
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamSearchParams {
    /// Team name prefix, case-sensitive; omitted matches every team
    pub teamname: Option<String>,
}

/// Search teams by name prefix.
///
/// # Returns
/// - `200 OK` - Teams whose name starts with the prefix, ordered by id
/// - `400 Bad Request` - No team matches
#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    params(TeamSearchParams),
    responses(
        (status = 200, description = "Matching teams", body = Vec<TeamDto>),
        (status = 400, description = "No team matches the prefix", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn search_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let prefix = params.teamname.unwrap_or_default();

    let teams = TeamService::new(&state.db)
        .find_by_name_prefix(&prefix)
        .await
        .map_err(search_miss)?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).find_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Get the players currently linked to a team.
#[utoipa::path(
    get,
    path = "/teams/{id}/players",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Players of the team", body = Vec<PlayerDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let players = TeamService::new(&state.db).players_of(id).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the matches a team hosted or visited.
#[utoipa::path(
    get,
    path = "/teams/{id}/matches",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Matches of the team", body = Vec<MatchDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_team_matches(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = TeamService::new(&state.db).matches_of(id).await?;

    let dtos: Vec<MatchDto> = matches.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new team.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Stored team, `Location` points at the new resource
/// - `400 Bad Request` - Invalid team data
/// - `401 Unauthorized` - Missing or invalid token
/// - `503 Service Unavailable` - Team could not be stored
#[utoipa::path(
    post,
    path = "/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    JsonBody(payload): JsonBody<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = CreateTeamParams::from_dto(payload)?;

    let team = TeamService::new(&state.db).insert(params).await?;
    let location = format!("/teams/{}", team.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(team.into_dto()),
    ))
}

/// Replace every field of a team.
///
/// The body must repeat the path id; a mismatch is rejected before validation.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Updated team
/// - `400 Bad Request` - Invalid team data
/// - `401 Unauthorized` - Missing token or id mismatch
/// - `404 Not Found` - Team not found
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated or id mismatch", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_same_id(id, payload.id)?;
    payload.validate()?;
    let params = UpdateTeamParams::from_dto(id, payload)?;

    let team = TeamService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team with its matches and their statistics; its players lose their team.
///
/// # Access Control
/// - Bearer token required
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Deleted team", body = TeamDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}
