//! Signed bearer tokens (JWT, HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Token payload: subject username plus issued-at and expiry as Unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks tokens with a shared HMAC secret.
///
/// Cheap to clone; a single instance lives in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify tokens
    /// - `expiry_minutes` - Lifetime of issued tokens
    pub fn new(secret: &str, expiry_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry: Duration::minutes(expiry_minutes),
        }
    }

    /// Issues a token for `username` valid for the configured lifetime.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Returns the subject of a validly signed, unexpired token.
    pub fn extract_username(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.decode(token)?.sub)
    }

    /// Validates a token and checks that it was issued to `expected_username`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature, expiry and subject are valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed token
    /// - `Err(AuthError::SubjectMismatch)` - Token belongs to another user
    pub fn validate_token(&self, token: &str, expected_username: &str) -> Result<Claims, AuthError> {
        let claims = self.decode(token)?;

        if claims.sub != expected_username {
            return Err(AuthError::SubjectMismatch);
        }

        Ok(claims)
    }

    fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests issuing and validating a token for the same user.
    ///
    /// Expected: Ok with the username as subject and expiry after issue time
    #[test]
    fn validates_issued_token() {
        let tokens = TokenService::new("test-secret", 30);

        let token = tokens.issue("admin").unwrap();
        let claims = tokens.validate_token(&token, "admin").unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(tokens.extract_username(&token).unwrap(), "admin");
    }

    /// Tests validating a token against a different user.
    ///
    /// Expected: Err(SubjectMismatch)
    #[test]
    fn rejects_other_subject() {
        let tokens = TokenService::new("test-secret", 30);
        let token = tokens.issue("admin").unwrap();

        assert!(matches!(
            tokens.validate_token(&token, "guest"),
            Err(AuthError::SubjectMismatch)
        ));
    }

    /// Tests that a token signed with another secret is rejected.
    ///
    /// Expected: Err(InvalidToken)
    #[test]
    fn rejects_foreign_signature() {
        let token = TokenService::new("other-secret", 30).issue("admin").unwrap();
        let tokens = TokenService::new("test-secret", 30);

        assert!(matches!(
            tokens.extract_username(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    /// Tests that an expired token is rejected.
    ///
    /// Expected: Err(InvalidToken)
    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("test-secret", -5);
        let token = tokens.issue("admin").unwrap();

        assert!(matches!(
            tokens.validate_token(&token, "admin"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_malformed_token() {
        let tokens = TokenService::new("test-secret", 30);

        assert!(tokens.extract_username("not.a.token").is_err());
    }
}
