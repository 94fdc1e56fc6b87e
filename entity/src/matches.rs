use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub match_date: Date,
    pub goals_host: i32,
    pub goals_guest: i32,
    #[sea_orm(indexed)]
    pub host_team_id: i32,
    #[sea_orm(indexed)]
    pub guest_team_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HostTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HostTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::GuestTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuestTeam,
    #[sea_orm(has_many = "super::match_player::Entity")]
    MatchPlayer,
}

impl Related<super::match_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPlayer.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        super::match_player::Relation::Player.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::match_player::Relation::Matches.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
