use axum::{extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    model::{api::ErrorDto, auth::LoginDto},
    server::{
        controller::JsonBody,
        error::AppError,
        model::required,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange a username and password for a bearer token.
///
/// The token is returned as the plain-text response body and must be sent back as
/// `Authorization: Bearer <token>` on mutating requests.
///
/// # Returns
/// - `200 OK` - Signed token
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed bearer token", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 503, description = "Service unavailable", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    let token = AuthService::new(&state.db, &state.token_service)
        .verify(&username, &password)
        .await?;

    Ok((StatusCode::OK, token))
}
