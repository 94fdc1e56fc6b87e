use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE, LOCATION},
    HeaderValue, Method,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::{token::TokenService, AuthService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured login account if it does not exist yet.
///
/// Does nothing unless both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set. An existing
/// account is left untouched, including its password.
///
/// # Returns
/// - `Ok(())` - Account exists or no account is configured
/// - `Err(AppError)` - Hashing or database error
pub async fn ensure_admin_user(
    db: &DatabaseConnection,
    config: &Config,
    tokens: &TokenService,
) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        tracing::info!("No admin credentials configured, skipping user bootstrap");
        return Ok(());
    };

    let created = AuthService::new(db, tokens)
        .ensure_user(username, password)
        .await?;
    if !created {
        tracing::info!("User '{}' already exists", username);
    }

    Ok(())
}

/// Builds the CORS layer from configuration.
///
/// Without `CORS_ALLOWED_ORIGIN` every origin is allowed. With it, only that origin
/// may call the API, and it may read the `Location` header of created resources.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to apply on the router
/// - `Err(AppError::ConfigErr)` - The configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([LOCATION]))
}
