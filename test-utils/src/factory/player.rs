//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db, team.id)
///     .lastname("Mantzios")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: Option<i32>,
    firstname: String,
    lastname: String,
    date_of_birth: Option<NaiveDate>,
    nationality: Option<String>,
    monetary_value: Option<i32>,
    player_role: Option<String>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - firstname: `"First{id}"`, lastname: `"Last{id}"`
    /// - date_of_birth: `Some(1995-05-17)`
    /// - nationality: `Some("Greek")`
    /// - monetary_value: `Some(100000)`
    /// - player_role: `Some("Midfielder")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Team the player belongs to
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id: Some(team_id),
            firstname: format!("First{}", id),
            lastname: format!("Last{}", id),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 5, 17),
            nationality: Some("Greek".to_string()),
            monetary_value: Some(100_000),
            player_role: Some("Midfielder".to_string()),
        }
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = lastname.into();
        self
    }

    /// Detaches the player from any team.
    pub fn without_team(mut self) -> Self {
        self.team_id = None;
        self
    }

    pub fn monetary_value(mut self, monetary_value: Option<i32>) -> Self {
        self.monetary_value = monetary_value;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown team)
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            firstname: ActiveValue::Set(self.firstname),
            lastname: ActiveValue::Set(self.lastname),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            nationality: ActiveValue::Set(self.nationality),
            monetary_value: ActiveValue::Set(self.monetary_value),
            player_role: ActiveValue::Set(self.player_role),
            team_id: ActiveValue::Set(self.team_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values for the specified team.
///
/// Shorthand for `PlayerFactory::new(db, team_id).build().await`.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id).build().await
}
