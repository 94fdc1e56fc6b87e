use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRY_MINUTES: i64 = 30;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,

    pub bind_address: String,

    /// Login created at startup when both values are set and the user is missing.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,

    /// Single allowed origin; CORS is permissive when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let jwt_expiry_minutes = match lookup("JWT_EXPIRY_MINUTES") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRY_MINUTES".to_string(),
                    value,
                })?,
            None => DEFAULT_JWT_EXPIRY_MINUTES,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_minutes,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            admin_username: lookup("ADMIN_USERNAME"),
            admin_password: lookup("ADMIN_PASSWORD"),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN"),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading only the required variables.
    ///
    /// Expected: Ok with defaults for every optional setting
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_expiry_minutes, 30);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.admin_username.is_none());
        assert!(config.cors_allowed_origin.is_none());
    }

    /// Tests a missing JWT secret.
    ///
    /// Expected: Err(MissingEnvVar("JWT_SECRET"))
    #[test]
    fn fails_without_secret() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "JWT_SECRET"
        ));
    }

    /// Tests an expiry that is not a positive number.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn rejects_invalid_expiry() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRY_MINUTES", "soon"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
