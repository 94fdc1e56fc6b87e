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
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::Firstname, 20))
                    .col(string_len(Player::Lastname, 30))
                    .col(date_null(Player::DateOfBirth))
                    .col(string_len_null(Player::Nationality, 30))
                    .col(integer_null(Player::MonetaryValue))
                    .col(string_len_null(Player::PlayerRole, 20))
                    .col(integer_null(Player::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_lastname")
                    .table(Player::Table)
                    .col(Player::Lastname)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_team_id")
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    Firstname,
    Lastname,
    DateOfBirth,
    Nationality,
    MonetaryValue,
    PlayerRole,
    TeamId,
}
