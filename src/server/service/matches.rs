//! Match service for business logic.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{match_player::MatchPlayerRepository, matches::MatchRepository, team::TeamRepository},
    error::AppError,
    model::matches::{CreateMatchParams, Match, UpdateMatchParams},
    service::not_found,
};

/// Service providing business logic for match management.
pub struct MatchService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new match between two existing, distinct teams.
    ///
    /// # Returns
    /// - `Ok(Match)` - The stored match
    /// - `Err(AppError::Validation)` - Host and guest are the same team
    /// - `Err(AppError::NotFound)` - Host or guest team does not exist
    /// - `Err(AppError::InsertFailed)` - The new row could not be read back
    pub async fn insert(&self, params: CreateMatchParams) -> Result<Match, AppError> {
        check_distinct_teams(&params)?;

        let txn = self.db.begin().await?;
        check_teams_exist(&txn, &params).await?;

        let match_repo = MatchRepository::new(&txn);
        let id = match_repo.create(params).await?;
        let fixture = match_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InsertFailed(format!("Match {} was not stored", id)))?;

        txn.commit().await?;
        tracing::info!(
            "Match {} inserted: team {} vs team {} on {}",
            fixture.id,
            fixture.host_team_id,
            fixture.guest_team_id,
            fixture.match_date
        );

        Ok(fixture)
    }

    /// Replaces date, score and both teams of a match.
    ///
    /// Changing a team id moves the match out of the old team's match list and into
    /// the new team's.
    ///
    /// # Returns
    /// - `Ok(Match)` - The updated match
    /// - `Err(AppError::Validation)` - Host and guest are the same team
    /// - `Err(AppError::NotFound)` - The match or one of the teams does not exist
    pub async fn update(&self, params: UpdateMatchParams) -> Result<Match, AppError> {
        check_distinct_teams(&params.changes)?;

        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        if match_repo.find_by_id(params.id).await?.is_none() {
            return Err(not_found(format!("Match {} not found", params.id)));
        }
        check_teams_exist(&txn, &params.changes).await?;

        let fixture = match_repo.update(params).await?;

        txn.commit().await?;
        tracing::info!("Match {} updated", fixture.id);

        Ok(fixture)
    }

    /// Deletes a match together with its player statistics.
    ///
    /// # Returns
    /// - `Ok(Match)` - The deleted match
    /// - `Err(AppError::NotFound)` - No match with that id exists
    pub async fn delete(&self, id: i32) -> Result<Match, AppError> {
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let Some(fixture) = match_repo.find_by_id(id).await? else {
            return Err(not_found(format!("Match {} not found", id)));
        };

        MatchPlayerRepository::new(&txn).delete_by_match(id).await?;
        match_repo.delete(id).await?;

        txn.commit().await?;
        tracing::info!("Match {} deleted", id);

        Ok(fixture)
    }

    /// Gets all matches played on a date.
    ///
    /// # Returns
    /// - `Ok(Vec<Match>)` - Matches on that date, never empty
    /// - `Err(AppError::NotFound)` - No match was played on that date
    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Match>, AppError> {
        let matches = MatchRepository::new(self.db).find_by_date(date).await?;

        if matches.is_empty() {
            return Err(not_found(format!("No matches found on {}", date)));
        }

        Ok(matches)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(format!("Match {} not found", id)))
    }

    /// Gets every match ordered by date.
    pub async fn find_all(&self) -> Result<Vec<Match>, AppError> {
        let matches = MatchRepository::new(self.db).find_all().await?;

        Ok(matches)
    }
}

fn check_distinct_teams(params: &CreateMatchParams) -> Result<(), AppError> {
    if params.host_team_id == params.guest_team_id {
        tracing::warn!(
            "Rejected match with team {} as both host and guest",
            params.host_team_id
        );
        return Err(AppError::Validation(vec![
            "guestTeamId: must differ from hostTeamId".to_string(),
        ]));
    }

    Ok(())
}

async fn check_teams_exist(
    txn: &DatabaseTransaction,
    params: &CreateMatchParams,
) -> Result<(), AppError> {
    let team_repo = TeamRepository::new(txn);

    for team_id in [params.host_team_id, params.guest_team_id] {
        if team_repo.find_by_id(team_id).await?.is_none() {
            return Err(not_found(format!("Team {} not found", team_id)));
        }
    }

    Ok(())
}
