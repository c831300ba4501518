pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_academy_table;
mod m20261019_000002_create_player_table;
mod m20261019_000003_create_academy_player_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_academy_table::Migration),
            Box::new(m20261019_000002_create_player_table::Migration),
            Box::new(m20261019_000003_create_academy_player_table::Migration),
        ]
    }
}
