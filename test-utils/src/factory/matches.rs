//! Match factory for creating test match entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::matches::MatchFactory;
///
/// let fixture = MatchFactory::new(&db, host.id, guest.id)
///     .match_date(NaiveDate::from_ymd_opt(2024, 10, 4).unwrap())
///     .score(2, 1)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    host_team_id: i32,
    guest_team_id: i32,
    match_date: NaiveDate,
    goals_host: i32,
    goals_guest: i32,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - match_date: `2024-09-01`
    /// - goals_host / goals_guest: `0` / `0`
    pub fn new(db: &'a DatabaseConnection, host_team_id: i32, guest_team_id: i32) -> Self {
        Self {
            db,
            host_team_id,
            guest_team_id,
            match_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or_default(),
            goals_host: 0,
            goals_guest: 0,
        }
    }

    pub fn match_date(mut self, match_date: NaiveDate) -> Self {
        self.match_date = match_date;
        self
    }

    pub fn score(mut self, goals_host: i32, goals_guest: i32) -> Self {
        self.goals_host = goals_host;
        self.goals_guest = goals_guest;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            id: ActiveValue::NotSet,
            match_date: ActiveValue::Set(self.match_date),
            goals_host: ActiveValue::Set(self.goals_host),
            goals_guest: ActiveValue::Set(self.goals_guest),
            host_team_id: ActiveValue::Set(self.host_team_id),
            guest_team_id: ActiveValue::Set(self.guest_team_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match with default values between the given teams.
pub async fn create_match(
    db: &DatabaseConnection,
    host_team_id: i32,
    guest_team_id: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, host_team_id, guest_team_id)
        .build()
        .await
}
