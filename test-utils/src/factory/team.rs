//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db)
///     .team_name("Aris")
///     .foundation_year(Some(1914))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    team_name: String,
    foundation_year: Option<i32>,
    city_name: String,
    stadium_name: String,
    coach_firstname: Option<String>,
    coach_lastname: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - team_name: `"Team {id}"` where id is auto-incremented
    /// - foundation_year: `Some(1920)`
    /// - city_name: `"City {id}"`
    /// - stadium_name: `"Stadium {id}"`
    /// - coach names: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            team_name: format!("Team {}", id),
            foundation_year: Some(1920),
            city_name: format!("City {}", id),
            stadium_name: format!("Stadium {}", id),
            coach_firstname: None,
            coach_lastname: None,
        }
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    pub fn foundation_year(mut self, foundation_year: Option<i32>) -> Self {
        self.foundation_year = foundation_year;
        self
    }

    pub fn city_name(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = city_name.into();
        self
    }

    pub fn stadium_name(mut self, stadium_name: impl Into<String>) -> Self {
        self.stadium_name = stadium_name.into();
        self
    }

    pub fn coach(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.coach_firstname = Some(firstname.into());
        self.coach_lastname = Some(lastname.into());
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            team_name: ActiveValue::Set(self.team_name),
            foundation_year: ActiveValue::Set(self.foundation_year),
            city_name: ActiveValue::Set(self.city_name),
            stadium_name: ActiveValue::Set(self.stadium_name),
            coach_firstname: ActiveValue::Set(self.coach_firstname),
            coach_lastname: ActiveValue::Set(self.coach_lastname),
            president_firstname: ActiveValue::Set(None),
            president_lastname: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
