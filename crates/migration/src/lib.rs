//! Migrator for the comment store schema.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_comment;
mod m20240301_000002_add_comment_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_comment::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000002_add_comment_indexes::Migration),
        ]
    }
}
