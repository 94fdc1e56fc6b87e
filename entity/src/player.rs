use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    #[sea_orm(indexed)]
    pub lastname: String,
    pub date_of_birth: Option<Date>,
    pub nationality: Option<String>,
    pub monetary_value: Option<i32>,
    pub player_role: Option<String>,
    #[sea_orm(indexed)]
    pub team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::match_player::Entity")]
    MatchPlayer,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::match_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPlayer.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        super::match_player::Relation::Matches.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::match_player::Relation::Player.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
