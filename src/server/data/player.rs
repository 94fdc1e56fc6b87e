//! Player data repository for database operations.

use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
    util::search::{prefix_pattern, LIKE_ESCAPE},
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player linked to `params.team_id`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Generated id of the new player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePlayerParams) -> Result<i32, DbErr> {
        let result = entity::prelude::Player::insert(active_model(params))
            .exec(self.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Replaces every mutable field of an existing player, including its team link.
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(DbErr::RecordNotUpdated)` - No player with that id exists
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, DbErr> {
        let mut model = active_model(params.changes);
        model.id = ActiveValue::Unchanged(params.id);

        let entity = model.update(self.db).await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Finds players whose last name starts with `prefix`, ordered by id.
    ///
    /// Same two-step match as `TeamRepository::find_by_name_prefix`: LIKE narrows the
    /// candidates and `starts_with` enforces case sensitivity.
    pub async fn find_by_lastname_prefix(&self, prefix: &str) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(
                entity::player::Column::Lastname
                    .like(LikeExpr::new(prefix_pattern(prefix)).escape(LIKE_ESCAPE)),
            )
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|p| p.lastname.starts_with(prefix))
            .map(Player::from_entity)
            .collect())
    }

    /// Gets all players currently linked to a team, ordered by id.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Unlinks every player of a team by setting their `team_id` to NULL.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of players unlinked
    /// - `Err(DbErr)` - Database error during update
    pub async fn detach_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::TeamId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn active_model(params: CreatePlayerParams) -> entity::player::ActiveModel {
    entity::player::ActiveModel {
        firstname: ActiveValue::Set(params.firstname),
        lastname: ActiveValue::Set(params.lastname),
        date_of_birth: ActiveValue::Set(params.date_of_birth),
        nationality: ActiveValue::Set(params.nationality),
        monetary_value: ActiveValue::Set(params.monetary_value),
        player_role: ActiveValue::Set(params.player_role),
        team_id: ActiveValue::Set(Some(params.team_id)),
        ..Default::default()
    }
}
