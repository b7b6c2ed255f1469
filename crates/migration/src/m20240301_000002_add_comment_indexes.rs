//! Index supporting the ordered full listing.
use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_comment::Comment;

#[derive(DeriveMigrationName)]
pub struct Migration;

const IDX_COMMENT_CREATED_AT: &str = "idx_comment_created_at";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_CREATED_AT)
                    .table(Comment::Table)
                    .col(Comment::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_COMMENT_CREATED_AT).table(Comment::Table).to_owned())
            .await
    }
}
