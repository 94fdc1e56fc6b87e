//! User credential model.

/// Login account. The password is only ever held as an argon2 PHC hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password,
        }
    }
}

/// Parameters for storing a new login account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    /// Argon2 PHC hash, never the clear-text password.
    pub password_hash: String,
}
