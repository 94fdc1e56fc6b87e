//! Player service for business logic.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{match_player::MatchPlayerRepository, player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
    service::not_found,
};

/// Service providing business logic for player management.
pub struct PlayerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new player linked to an existing team.
    ///
    /// # Returns
    /// - `Ok(Player)` - The stored player
    /// - `Err(AppError::NotFound)` - The team does not exist; nothing is written
    /// - `Err(AppError::InsertFailed)` - The new row could not be read back
    pub async fn insert(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);

        if TeamRepository::new(&txn)
            .find_by_id(params.team_id)
            .await?
            .is_none()
        {
            return Err(not_found(format!("Team {} not found", params.team_id)));
        }

        let id = player_repo.create(params).await?;
        let player = player_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InsertFailed(format!("Player {} was not stored", id)))?;

        txn.commit().await?;
        tracing::info!("Player {} '{}' inserted", player.id, player.lastname);

        Ok(player)
    }

    /// Replaces every mutable field of a player and re-links it to the given team.
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(AppError::NotFound)` - The player or the new team does not exist
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);

        if player_repo.find_by_id(params.id).await?.is_none() {
            return Err(not_found(format!("Player {} not found", params.id)));
        }
        let team_id = params.changes.team_id;
        if TeamRepository::new(&txn).find_by_id(team_id).await?.is_none() {
            return Err(not_found(format!("Team {} not found", team_id)));
        }

        let player = player_repo.update(params).await?;

        txn.commit().await?;
        tracing::info!("Player {} updated", player.id);

        Ok(player)
    }

    /// Deletes a player together with its match statistics.
    ///
    /// # Returns
    /// - `Ok(Player)` - The deleted player
    /// - `Err(AppError::NotFound)` - No player with that id exists
    pub async fn delete(&self, id: i32) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);

        let Some(player) = player_repo.find_by_id(id).await? else {
            return Err(not_found(format!("Player {} not found", id)));
        };

        MatchPlayerRepository::new(&txn).delete_by_player(id).await?;
        player_repo.delete(id).await?;

        txn.commit().await?;
        tracing::info!("Player {} deleted", id);

        Ok(player)
    }

    /// Finds players whose last name starts with `prefix`.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Matching players ordered by id, never empty
    /// - `Err(AppError::NotFound)` - No player matches
    pub async fn find_by_lastname_prefix(&self, prefix: &str) -> Result<Vec<Player>, AppError> {
        let players = PlayerRepository::new(self.db)
            .find_by_lastname_prefix(prefix)
            .await?;

        if players.is_empty() {
            return Err(not_found(format!(
                "No players found with last name starting with '{}'",
                prefix
            )));
        }

        Ok(players)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(format!("Player {} not found", id)))
    }
}
