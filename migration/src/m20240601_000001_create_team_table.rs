use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_len(Team::TeamName, 50))
                    .col(integer_null(Team::FoundationYear))
                    .col(string_len(Team::CityName, 30))
                    .col(string_len(Team::StadiumName, 50))
                    .col(string_len_null(Team::CoachFirstname, 20))
                    .col(string_len_null(Team::CoachLastname, 30))
                    .col(string_len_null(Team::PresidentFirstname, 20))
                    .col(string_len_null(Team::PresidentLastname, 30))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teams_team_name")
                    .table(Team::Table)
                    .col(Team::TeamName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    TeamName,
    FoundationYear,
    CityName,
    StadiumName,
    CoachFirstname,
    CoachLastname,
    PresidentFirstname,
    PresidentLastname,
}
