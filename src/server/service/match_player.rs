//! Match player statistics service.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        match_player::MatchPlayerRepository, matches::MatchRepository, player::PlayerRepository,
    },
    error::AppError,
    model::match_player::{MatchPlayer, MatchPlayerParams},
    service::not_found,
};

/// Service managing the statistics of players in matches.
pub struct MatchPlayerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MatchPlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores statistics for a (match, player) pair.
    ///
    /// The duplicate check runs before the reference checks.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The stored record
    /// - `Err(AppError::AlreadyExists)` - The pair already has a record
    /// - `Err(AppError::NotFound)` - The match or the player does not exist
    /// - `Err(AppError::InsertFailed)` - The new row could not be read back
    pub async fn insert(&self, params: MatchPlayerParams) -> Result<MatchPlayer, AppError> {
        let (match_id, player_id) = (params.match_id, params.player_id);
        let txn = self.db.begin().await?;
        let record_repo = MatchPlayerRepository::new(&txn);

        if record_repo
            .find_by_match_and_player(match_id, player_id)
            .await?
            .is_some()
        {
            let message = format!(
                "Statistics for player {} in match {} already exist",
                player_id, match_id
            );
            tracing::warn!("{}", message);
            return Err(AppError::AlreadyExists(message));
        }
        check_references(&txn, match_id, player_id).await?;

        record_repo.create(params).await?;
        let record = record_repo
            .find_by_match_and_player(match_id, player_id)
            .await?
            .ok_or_else(|| {
                AppError::InsertFailed(format!(
                    "Statistics for player {} in match {} were not stored",
                    player_id, match_id
                ))
            })?;

        txn.commit().await?;
        tracing::info!(
            "Statistics for player {} in match {} inserted",
            player_id,
            match_id
        );

        Ok(record)
    }

    /// Replaces the statistics of an existing pair.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The updated record
    /// - `Err(AppError::NotFound)` - The pair has no record, or its match or player is gone
    pub async fn update(&self, params: MatchPlayerParams) -> Result<MatchPlayer, AppError> {
        let (match_id, player_id) = (params.match_id, params.player_id);
        let txn = self.db.begin().await?;
        let record_repo = MatchPlayerRepository::new(&txn);

        if record_repo
            .find_by_match_and_player(match_id, player_id)
            .await?
            .is_none()
        {
            return Err(not_found(format!(
                "Statistics for player {} in match {} not found",
                player_id, match_id
            )));
        }
        check_references(&txn, match_id, player_id).await?;

        let record = record_repo.update(params).await?;

        txn.commit().await?;
        tracing::info!(
            "Statistics for player {} in match {} updated",
            player_id,
            match_id
        );

        Ok(record)
    }

    /// Deletes the statistics of a pair.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The deleted record
    /// - `Err(AppError::NotFound)` - The pair has no record
    pub async fn delete(&self, match_id: i32, player_id: i32) -> Result<MatchPlayer, AppError> {
        let txn = self.db.begin().await?;
        let record_repo = MatchPlayerRepository::new(&txn);

        let Some(record) = record_repo
            .find_by_match_and_player(match_id, player_id)
            .await?
        else {
            return Err(not_found(format!(
                "Statistics for player {} in match {} not found",
                player_id, match_id
            )));
        };

        record_repo.delete(match_id, player_id).await?;

        txn.commit().await?;
        tracing::info!(
            "Statistics for player {} in match {} deleted",
            player_id,
            match_id
        );

        Ok(record)
    }

    pub async fn find_by_match_and_player(
        &self,
        match_id: i32,
        player_id: i32,
    ) -> Result<MatchPlayer, AppError> {
        MatchPlayerRepository::new(self.db)
            .find_by_match_and_player(match_id, player_id)
            .await?
            .ok_or_else(|| {
                not_found(format!(
                    "Statistics for player {} in match {} not found",
                    player_id, match_id
                ))
            })
    }

    /// Gets the statistics of every player in a match.
    ///
    /// # Returns
    /// - `Ok(Vec<MatchPlayer>)` - Records ordered by player id, possibly empty
    /// - `Err(AppError::NotFound)` - No match with that id exists
    pub async fn find_by_match(&self, match_id: i32) -> Result<Vec<MatchPlayer>, AppError> {
        if MatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .is_none()
        {
            return Err(not_found(format!("Match {} not found", match_id)));
        }

        let records = MatchPlayerRepository::new(self.db)
            .find_by_match(match_id)
            .await?;

        Ok(records)
    }
}

async fn check_references(
    txn: &DatabaseTransaction,
    match_id: i32,
    player_id: i32,
) -> Result<(), AppError> {
    if MatchRepository::new(txn).find_by_id(match_id).await?.is_none() {
        return Err(not_found(format!("Match {} not found", match_id)));
    }
    if PlayerRepository::new(txn).find_by_id(player_id).await?.is_none() {
        return Err(not_found(format!("Player {} not found", player_id)));
    }

    Ok(())
}
