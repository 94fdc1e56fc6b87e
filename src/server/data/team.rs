//! Team data repository for database operations.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
    util::search::{prefix_pattern, LIKE_ESCAPE},
};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `TeamRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Arguments
    /// - `params` - Team attributes
    ///
    /// # Returns
    /// - `Ok(i32)` - Generated id of the new team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTeamParams) -> Result<i32, DbErr> {
        let result = entity::prelude::Team::insert(active_model(params))
            .exec(self.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Replaces every mutable field of an existing team.
    ///
    /// # Arguments
    /// - `params` - Team id and new attribute values
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(DbErr::RecordNotUpdated)` - No team with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let mut model = active_model(params.changes);
        model.id = ActiveValue::Unchanged(params.id);

        let entity = model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes a team by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when the team did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds teams whose name starts with `prefix`, ordered by id.
    ///
    /// The LIKE query narrows candidates in the database; the final comparison is done
    /// in memory because SQLite's LIKE ignores ASCII case. An empty prefix matches
    /// every team.
    ///
    /// # Arguments
    /// - `prefix` - Case-sensitive name prefix
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Matching teams (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(
                entity::team::Column::TeamName
                    .like(LikeExpr::new(prefix_pattern(prefix)).escape(LIKE_ESCAPE)),
            )
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|t| t.team_name.starts_with(prefix))
            .map(Team::from_entity)
            .collect())
    }
}

fn active_model(params: CreateTeamParams) -> entity::team::ActiveModel {
    entity::team::ActiveModel {
        team_name: ActiveValue::Set(params.team_name),
        foundation_year: ActiveValue::Set(params.foundation_year),
        city_name: ActiveValue::Set(params.city_name),
        stadium_name: ActiveValue::Set(params.stadium_name),
        coach_firstname: ActiveValue::Set(params.coach_firstname),
        coach_lastname: ActiveValue::Set(params.coach_lastname),
        president_firstname: ActiveValue::Set(params.president_firstname),
        president_lastname: ActiveValue::Set(params.president_lastname),
        ..Default::default()
    }
}
