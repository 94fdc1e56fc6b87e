use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(pk_auto(Match::Id))
                    .col(date(Match::MatchDate))
                    .col(integer(Match::GoalsHost).default(0))
                    .col(integer(Match::GoalsGuest).default(0))
                    .col(integer(Match::HostTeamId))
                    .col(integer(Match::GuestTeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_host_team_id")
                            .from(Match::Table, Match::HostTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_guest_team_id")
                            .from(Match::Table, Match::GuestTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_match_date")
                    .table(Match::Table)
                    .col(Match::MatchDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_host_team_id")
                    .table(Match::Table)
                    .col(Match::HostTeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_guest_team_id")
                    .table(Match::Table)
                    .col(Match::GuestTeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    MatchDate,
    GoalsHost,
    GoalsGuest,
    HostTeamId,
    GuestTeamId,
}
