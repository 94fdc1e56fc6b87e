//! Match player statistics repository.
//!
//! Rows are keyed by the composite (match_id, player_id) primary key, so every
//! lookup takes both ids.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::match_player::{MatchPlayer, MatchPlayerParams};

pub struct MatchPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchPlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts statistics for a (match, player) pair.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted
    /// - `Err(DbErr)` - Database error, including a primary key conflict for an existing pair
    pub async fn create(&self, params: MatchPlayerParams) -> Result<(), DbErr> {
        entity::prelude::MatchPlayer::insert(active_model(params))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the statistics of an existing (match, player) pair.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The updated record
    /// - `Err(DbErr::RecordNotUpdated)` - The pair has no record
    pub async fn update(&self, params: MatchPlayerParams) -> Result<MatchPlayer, DbErr> {
        let model = entity::match_player::ActiveModel {
            match_id: ActiveValue::Unchanged(params.match_id),
            player_id: ActiveValue::Unchanged(params.player_id),
            ..active_model(params)
        };

        let entity = model.update(self.db).await?;

        Ok(MatchPlayer::from_entity(entity))
    }

    pub async fn delete(&self, match_id: i32, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MatchPlayer::delete_by_id((match_id, player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_match_and_player(
        &self,
        match_id: i32,
        player_id: i32,
    ) -> Result<Option<MatchPlayer>, DbErr> {
        let entity = entity::prelude::MatchPlayer::find_by_id((match_id, player_id))
            .one(self.db)
            .await?;

        Ok(entity.map(MatchPlayer::from_entity))
    }

    /// Gets the statistics of every player in a match, ordered by player id.
    pub async fn find_by_match(&self, match_id: i32) -> Result<Vec<MatchPlayer>, DbErr> {
        let entities = entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .order_by_asc(entity::match_player::Column::PlayerId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MatchPlayer::from_entity).collect())
    }

    pub async fn delete_by_match(&self, match_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the statistics rows of several matches at once.
    pub async fn delete_by_matches(&self, match_ids: Vec<i32>) -> Result<u64, DbErr> {
        if match_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::MatchId.is_in(match_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_player(&self, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn active_model(params: MatchPlayerParams) -> entity::match_player::ActiveModel {
    entity::match_player::ActiveModel {
        match_id: ActiveValue::Set(params.match_id),
        player_id: ActiveValue::Set(params.player_id),
        play_time: ActiveValue::Set(params.play_time),
        goals: ActiveValue::Set(params.goals),
        assists: ActiveValue::Set(params.assists),
        cards: ActiveValue::Set(params.cards),
    }
}
