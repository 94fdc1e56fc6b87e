//! MatchPlayer factory for creating per-match player statistics.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test statistics records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::match_player::MatchPlayerFactory;
///
/// let record = MatchPlayerFactory::new(&db, fixture.id, player.id)
///     .goals(2)
///     .build()
///     .await?;
/// ```
pub struct MatchPlayerFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    player_id: i32,
    play_time: i32,
    goals: i32,
    assists: i32,
    cards: i32,
}

impl<'a> MatchPlayerFactory<'a> {
    /// Creates a new MatchPlayerFactory with default values.
    ///
    /// Defaults:
    /// - play_time: `90`
    /// - goals, assists, cards: `0`
    pub fn new(db: &'a DatabaseConnection, match_id: i32, player_id: i32) -> Self {
        Self {
            db,
            match_id,
            player_id,
            play_time: 90,
            goals: 0,
            assists: 0,
            cards: 0,
        }
    }

    pub fn play_time(mut self, play_time: i32) -> Self {
        self.play_time = play_time;
        self
    }

    pub fn goals(mut self, goals: i32) -> Self {
        self.goals = goals;
        self
    }

    pub fn assists(mut self, assists: i32) -> Self {
        self.assists = assists;
        self
    }

    pub fn cards(mut self, cards: i32) -> Self {
        self.cards = cards;
        self
    }

    /// Builds and inserts the statistics record into the database.
    pub async fn build(self) -> Result<entity::match_player::Model, DbErr> {
        entity::match_player::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            player_id: ActiveValue::Set(self.player_id),
            play_time: ActiveValue::Set(self.play_time),
            goals: ActiveValue::Set(self.goals),
            assists: ActiveValue::Set(self.assists),
            cards: ActiveValue::Set(self.cards),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a statistics record with default values for the given pair.
pub async fn create_match_player(
    db: &DatabaseConnection,
    match_id: i32,
    player_id: i32,
) -> Result<entity::match_player::Model, DbErr> {
    MatchPlayerFactory::new(db, match_id, player_id)
        .build()
        .await
}
