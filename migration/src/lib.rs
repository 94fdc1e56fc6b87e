pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_team_table;
mod m20240601_000002_create_player_table;
mod m20240601_000003_create_match_table;
mod m20240601_000004_create_match_player_table;
mod m20240601_000005_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_team_table::Migration),
            Box::new(m20240601_000002_create_player_table::Migration),
            Box::new(m20240601_000003_create_match_table::Migration),
            Box::new(m20240601_000004_create_match_player_table::Migration),
            Box::new(m20240601_000005_create_user_table::Migration),
        ]
    }
}
