//! Login and bearer-token authentication.
//!
//! `AuthService` checks credentials against the stored argon2 hashes and issues
//! tokens through `TokenService`. Tokens are stateless; nothing is kept server-side.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::auth::token::TokenService,
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies a username and password and issues a token for the user.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Clear-text password from the login request
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token whose subject is the username
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn verify(&self, username: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            tracing::warn!("Login attempt for unknown user '{}'", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash)? {
            tracing::warn!("Login attempt with wrong password for user '{}'", username);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user.username)?;
        tracing::info!("User '{}' logged in", user.username);

        Ok(token)
    }

    /// Resolves the user a bearer token was issued to.
    ///
    /// Reads the subject from the token, loads that user and then validates the token
    /// against the loaded username.
    ///
    /// # Returns
    /// - `Ok(User)` - Token is valid and its user exists
    /// - `Err(AppError::AuthErr)` - Token is invalid, expired or its user no longer exists
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let username = self.tokens.extract_username(token)?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(&username)
            .await?
        else {
            return Err(AuthError::InvalidToken(format!("user '{}' no longer exists", username)).into());
        };

        self.tokens.validate_token(token, &user.username)?;

        Ok(user)
    }

    /// Creates a login account unless one with the same username exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was created
    /// - `Ok(false)` - An account with that username already exists and was left as is
    /// - `Err(AppError)` - Hashing or database error
    pub async fn ensure_user(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = password::hash_password(password)?;
        user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash,
            })
            .await?;
        tracing::info!("Created user '{}'", username);

        Ok(true)
    }
}
