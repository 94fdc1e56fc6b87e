use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{token::TokenService, AuthService},
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Resolves the user behind the request's bearer token.
    ///
    /// # Returns
    /// - `Ok(User)` - Token is valid and its user exists
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header or not the Bearer scheme
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or unknown user
    /// - `Err(AuthError::SubjectMismatch)` - Token subject differs from the loaded user
    pub async fn require(&self) -> Result<User, AppError> {
        let token = self.bearer_token()?;

        AuthService::new(self.db, self.tokens).authenticate(token).await
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken);
        };

        value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}

/// Extractor for handlers that need an authenticated user.
///
/// Runs before the request body is read, so a request without a valid token is
/// rejected with 401 regardless of its payload.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.token_service, &parts.headers)
            .require()
            .await?;

        Ok(Self(user))
    }
}
