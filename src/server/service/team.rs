//! Team service for business logic.
//!
//! Deleting a team removes the matches it took part in, together with their player
//! statistics, and unlinks its players. All of this happens in one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        match_player::MatchPlayerRepository, matches::MatchRepository, player::PlayerRepository,
        team::TeamRepository,
    },
    error::AppError,
    model::{
        matches::Match,
        player::Player,
        team::{CreateTeamParams, Team, UpdateTeamParams},
    },
    service::not_found,
};

/// Service providing business logic for team management.
pub struct TeamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new TeamService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeamService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new team.
    ///
    /// # Arguments
    /// - `params` - Team attributes
    ///
    /// # Returns
    /// - `Ok(Team)` - The stored team with its generated id
    /// - `Err(AppError::InsertFailed)` - The new row could not be read back
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn insert(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        let id = team_repo.create(params).await?;
        let team = team_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InsertFailed(format!("Team {} was not stored", id)))?;

        txn.commit().await?;
        tracing::info!("Team {} '{}' inserted", team.id, team.team_name);

        Ok(team)
    }

    /// Replaces every mutable field of a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::NotFound)` - No team with that id exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, AppError> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        if team_repo.find_by_id(params.id).await?.is_none() {
            return Err(not_found(format!("Team {} not found", params.id)));
        }
        let team = team_repo.update(params).await?;

        txn.commit().await?;
        tracing::info!("Team {} updated", team.id);

        Ok(team)
    }

    /// Deletes a team and everything that depends on it.
    ///
    /// Within one transaction: removes the statistics of every match the team hosted
    /// or visited, removes those matches, sets `team_id` to NULL on the team's players
    /// and finally deletes the team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The deleted team
    /// - `Err(AppError::NotFound)` - No team with that id exists
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<Team, AppError> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);
        let match_repo = MatchRepository::new(&txn);

        let Some(team) = team_repo.find_by_id(id).await? else {
            return Err(not_found(format!("Team {} not found", id)));
        };

        let match_ids: Vec<i32> = match_repo
            .find_by_team(id)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();
        let stats = MatchPlayerRepository::new(&txn)
            .delete_by_matches(match_ids)
            .await?;
        let matches = match_repo.delete_by_team(id).await?;
        let players = PlayerRepository::new(&txn).detach_team(id).await?;
        team_repo.delete(id).await?;

        txn.commit().await?;
        tracing::info!(
            "Team {} deleted with {} matches and {} statistics rows, {} players unlinked",
            id,
            matches,
            stats,
            players
        );

        Ok(team)
    }

    /// Finds teams whose name starts with `prefix`.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Matching teams ordered by id, never empty
    /// - `Err(AppError::NotFound)` - No team matches
    pub async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Team>, AppError> {
        let teams = TeamRepository::new(self.db)
            .find_by_name_prefix(prefix)
            .await?;

        if teams.is_empty() {
            return Err(not_found(format!(
                "No teams found with name starting with '{}'",
                prefix
            )));
        }

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(format!("Team {} not found", id)))
    }

    /// Gets the players currently linked to a team.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players of the team, possibly empty
    /// - `Err(AppError::NotFound)` - No team with that id exists
    pub async fn players_of(&self, team_id: i32) -> Result<Vec<Player>, AppError> {
        self.find_by_id(team_id).await?;

        let players = PlayerRepository::new(self.db).find_by_team(team_id).await?;

        Ok(players)
    }

    /// Gets the matches a team hosted or visited.
    ///
    /// # Returns
    /// - `Ok(Vec<Match>)` - Matches of the team, possibly empty
    /// - `Err(AppError::NotFound)` - No team with that id exists
    pub async fn matches_of(&self, team_id: i32) -> Result<Vec<Match>, AppError> {
        self.find_by_id(team_id).await?;

        let matches = MatchRepository::new(self.db).find_by_team(team_id).await?;

        Ok(matches)
    }
}
