pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_registros_table;
mod m20250101_000002_create_permitted_channels_table;
mod m20250101_000003_create_msg_counts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_registros_table::Migration),
            Box::new(m20250101_000002_create_permitted_channels_table::Migration),
            Box::new(m20250101_000003_create_msg_counts_table::Migration),
        ]
    }
}
