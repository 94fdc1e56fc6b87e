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
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    server::{
        controller::{ensure_same_id, search_miss, JsonBody},
        error::AppError,
        middleware::auth::AuthUser,
        model::player::{CreatePlayerParams, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerSearchParams {
    /// Last name prefix, case-sensitive; omitted matches every player
    pub lastname: Option<String>,
}

/// Search players by last name prefix.
///
/// # Returns
/// - `200 OK` - Players whose last name starts with the prefix, ordered by id
/// - `400 Bad Request` - No player matches
#[utoipa::path(
    get,
    path = "/players",
    tag = PLAYER_TAG,
    params(PlayerSearchParams),
    responses(
        (status = 200, description = "Matching players", body = Vec<PlayerDto>),
        (status = 400, description = "No player matches the prefix", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let prefix = params.lastname.unwrap_or_default();

    let players = PlayerService::new(&state.db)
        .find_by_lastname_prefix(&prefix)
        .await
        .map_err(search_miss)?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player found", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).find_by_id(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Create a new player for an existing team.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Stored player, `Location` points at the new resource
/// - `400 Bad Request` - Invalid player data
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Referenced team not found
#[utoipa::path(
    post,
    path = "/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    JsonBody(payload): JsonBody<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = CreatePlayerParams::from_dto(payload)?;

    let player = PlayerService::new(&state.db).insert(params).await?;
    let location = format!("/players/{}", player.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(player.into_dto()),
    ))
}

/// Replace every field of a player, including its team.
///
/// # Access Control
/// - Bearer token required
#[utoipa::path(
    put,
    path = "/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "Not authenticated or id mismatch", body = ErrorDto),
        (status = 404, description = "Player or team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_same_id(id, payload.id)?;
    payload.validate()?;
    let params = UpdatePlayerParams::from_dto(id, payload)?;

    let player = PlayerService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Deleted player", body = PlayerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}
