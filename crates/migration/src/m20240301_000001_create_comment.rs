//! Create `comment` table.
//!
//! Each row is one opaque comment document keyed by its string identifier.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(string_len(Comment::Id, 64).primary_key())
                    .col(json_binary(Comment::Document).not_null())
                    .col(timestamp_with_time_zone(Comment::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Comment { Table, Id, Document, CreatedAt }
