use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        match_player::{MatchPlayerDto, MatchPlayerRequestDto},
    },
    server::{
        controller::{ensure_same_id, JsonBody},
        error::AppError,
        middleware::auth::AuthUser,
        model::match_player::MatchPlayerParams,
        service::match_player::MatchPlayerService,
        state::AppState,
    },
};

/// Tag for grouping match statistics endpoints in OpenAPI documentation
pub static MATCH_PLAYER_TAG: &str = "match_player";

/// Get the statistics of every player who appeared in a match.
#[utoipa::path(
    get,
    path = "/matchesplayers/{match_id}",
    tag = MATCH_PLAYER_TAG,
    params(("match_id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Statistics of the match", body = Vec<MatchPlayerDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_match_players(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let records = MatchPlayerService::new(&state.db)
        .find_by_match(match_id)
        .await?;

    let dtos: Vec<MatchPlayerDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/matchesplayers/{match_id}/{player_id}",
    tag = MATCH_PLAYER_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Statistics found", body = MatchPlayerDto),
        (status = 404, description = "No statistics for this pair", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_match_player(
    State(state): State<AppState>,
    Path((match_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let record = MatchPlayerService::new(&state.db)
        .find_by_match_and_player(match_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Record a player's statistics for a match.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Stored statistics, `Location` points at the new resource
/// - `400 Bad Request` - Invalid data or statistics already recorded for the pair
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Match or player not found
#[utoipa::path(
    post,
    path = "/matchesplayers",
    tag = MATCH_PLAYER_TAG,
    request_body = MatchPlayerRequestDto,
    responses(
        (status = 201, description = "Statistics created", body = MatchPlayerDto),
        (status = 400, description = "Invalid data or already recorded", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match or player not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    JsonBody(payload): JsonBody<MatchPlayerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = MatchPlayerParams::from_dto(payload)?;

    let record = MatchPlayerService::new(&state.db).insert(params).await?;
    let location = format!("/matchesplayers/{}/{}", record.match_id, record.player_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(record.into_dto()),
    ))
}

/// Replace the statistics of a (match, player) pair.
///
/// Both ids in the body must repeat the ones from the path.
///
/// # Access Control
/// - Bearer token required
#[utoipa::path(
    put,
    path = "/matchesplayers/{match_id}/{player_id}",
    tag = MATCH_PLAYER_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    request_body = MatchPlayerRequestDto,
    responses(
        (status = 200, description = "Statistics updated", body = MatchPlayerDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not authenticated or id mismatch", body = ErrorDto),
        (status = 404, description = "No statistics for this pair", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path((match_id, player_id)): Path<(i32, i32)>,
    JsonBody(payload): JsonBody<MatchPlayerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_same_id(match_id, payload.match_id)?;
    ensure_same_id(player_id, payload.player_id)?;
    payload.validate()?;
    let params = MatchPlayerParams::from_dto(payload)?;

    let record = MatchPlayerService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/matchesplayers/{match_id}/{player_id}",
    tag = MATCH_PLAYER_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Deleted statistics", body = MatchPlayerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No statistics for this pair", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match_player(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path((match_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let record = MatchPlayerService::new(&state.db)
        .delete(match_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}
