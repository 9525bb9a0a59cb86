pub use sea_orm_migration::prelude::*;

mod m20250310_120000_create_tables;
mod m20250310_130000_users_email_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_120000_create_tables::Migration),
            Box::new(m20250310_130000_users_email_index::Migration),
        ]
    }
}
