//! Match data repository for database operations.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::matches::{CreateMatchParams, Match, UpdateMatchParams};

/// Repository providing database operations for matches.
pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new match.
    ///
    /// # Returns
    /// - `Ok(i32)` - Generated id of the new match
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateMatchParams) -> Result<i32, DbErr> {
        let result = entity::prelude::Matches::insert(active_model(params))
            .exec(self.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Replaces date, score and both team links of an existing match.
    ///
    /// # Returns
    /// - `Ok(Match)` - The updated match
    /// - `Err(DbErr::RecordNotUpdated)` - No match with that id exists
    pub async fn update(&self, params: UpdateMatchParams) -> Result<Match, DbErr> {
        let mut model = active_model(params.changes);
        model.id = ActiveValue::Unchanged(params.id);

        let entity = model.update(self.db).await?;

        Ok(Match::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Matches::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        let entity = entity::prelude::Matches::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Match::from_entity))
    }

    /// Gets all matches played on `date`, ordered by id.
    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Match>, DbErr> {
        let entities = entity::prelude::Matches::find()
            .filter(entity::matches::Column::MatchDate.eq(date))
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Gets every match ordered by date, then id.
    pub async fn find_all(&self) -> Result<Vec<Match>, DbErr> {
        let entities = entity::prelude::Matches::find()
            .order_by_asc(entity::matches::Column::MatchDate)
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Gets all matches a team hosted or visited, ordered by id.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Match>, DbErr> {
        let entities = entity::prelude::Matches::find()
            .filter(team_condition(team_id))
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Deletes all matches a team hosted or visited.
    ///
    /// Statistics rows of those matches must be removed first, see
    /// `MatchPlayerRepository::delete_by_matches`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted matches
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Matches::delete_many()
            .filter(team_condition(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn team_condition(team_id: i32) -> Condition {
    Condition::any()
        .add(entity::matches::Column::HostTeamId.eq(team_id))
        .add(entity::matches::Column::GuestTeamId.eq(team_id))
}

fn active_model(params: CreateMatchParams) -> entity::matches::ActiveModel {
    entity::matches::ActiveModel {
        match_date: ActiveValue::Set(params.match_date),
        goals_host: ActiveValue::Set(params.goals_host),
        goals_guest: ActiveValue::Set(params.goals_guest),
        host_team_id: ActiveValue::Set(params.host_team_id),
        guest_team_id: ActiveValue::Set(params.guest_team_id),
        ..Default::default()
    }
}
