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
        matches::{CreateMatchDto, MatchDto, UpdateMatchDto},
    },
    server::{
        controller::{ensure_same_id, search_miss, JsonBody},
        error::AppError,
        middleware::auth::AuthUser,
        model::matches::{CreateMatchParams, UpdateMatchParams},
        service::matches::MatchService,
        state::AppState,
        util::parse::parse_compact_date,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MatchSearchParams {
    /// Match day as `ddMMyyyy`; omitted lists every match
    pub date: Option<String>,
}

/// List matches, optionally restricted to one day.
///
/// # Returns
/// - `200 OK` - Matches on that day, or every match when no date is given
/// - `400 Bad Request` - Malformed date or no match on that day
#[utoipa::path(
    get,
    path = "/matches",
    tag = MATCH_TAG,
    params(MatchSearchParams),
    responses(
        (status = 200, description = "Matching matches", body = Vec<MatchDto>),
        (status = 400, description = "Malformed date or no match on that day", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn search_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    let matches = match params.date {
        Some(raw) => {
            let date = parse_compact_date(&raw)?;
            service.find_by_date(date).await.map_err(search_miss)?
        }
        None => service.find_all().await?,
    };

    let dtos: Vec<MatchDto> = matches.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match found", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = MatchService::new(&state.db).find_by_id(id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Create a match between two different existing teams.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Stored match, `Location` points at the new resource
/// - `400 Bad Request` - Invalid match data or host equals guest
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Host or guest team not found
#[utoipa::path(
    post,
    path = "/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    JsonBody(payload): JsonBody<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = CreateMatchParams::from_dto(payload)?;

    let fixture = MatchService::new(&state.db).insert(params).await?;
    let location = format!("/matches/{}", fixture.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(fixture.into_dto()),
    ))
}

/// Replace every field of a match, including its teams.
///
/// # Access Control
/// - Bearer token required
#[utoipa::path(
    put,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Not authenticated or id mismatch", body = ErrorDto),
        (status = 404, description = "Match or team not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_same_id(id, payload.id)?;
    payload.validate()?;
    let params = UpdateMatchParams::from_dto(id, payload)?;

    let fixture = MatchService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Delete a match together with its player statistics.
#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Deleted match", body = MatchDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = MatchService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}
