use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000002_create_player_table::Player, m20240601_000003_create_match_table::Match,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchPlayer::Table)
                    .if_not_exists()
                    .col(integer(MatchPlayer::MatchId))
                    .col(integer(MatchPlayer::PlayerId))
                    .col(integer(MatchPlayer::PlayTime).default(0))
                    .col(integer(MatchPlayer::Goals).default(0))
                    .col(integer(MatchPlayer::Assists).default(0))
                    .col(integer(MatchPlayer::Cards).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_matches_players")
                            .col(MatchPlayer::MatchId)
                            .col(MatchPlayer::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_players_match_id")
                            .from(MatchPlayer::Table, MatchPlayer::MatchId)
                            .to(Match::Table, Match::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_players_player_id")
                            .from(MatchPlayer::Table, MatchPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchPlayer {
    #[sea_orm(iden = "matches_players")]
    Table,
    MatchId,
    PlayerId,
    PlayTime,
    Goals,
    Assists,
    Cards,
}
