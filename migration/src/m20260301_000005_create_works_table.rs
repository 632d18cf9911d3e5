use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Works::Table)
                    .if_not_exists()
                    .col(pk_auto(Works::Id))
                    .col(string(Works::Title))
                    .col(string_len(Works::Type, 20))
                    .col(text(Works::Content))
                    .col(string_len(Works::Status, 20).default("pending"))
                    .col(integer(Works::AuthorId))
                    .col(integer(Works::Views).default(0))
                    .col(integer(Works::Likes).default(0))
                    .col(timestamp_with_time_zone_null(Works::ReviewedAt))
                    .col(integer_null(Works::ReviewedBy))
                    .col(text_null(Works::ReviewNote))
                    .col(text_null(Works::RejectReason))
                    .col(
                        timestamp_with_time_zone(Works::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Works::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_works_author_id")
                            .from(Works::Table, Works::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_works_reviewed_by")
                            .from(Works::Table, Works::ReviewedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_works_status")
                    .table(Works::Table)
                    .col(Works::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Works {
    Table,
    Id,
    Title,
    Type,
    Content,
    Status,
    AuthorId,
    Views,
    Likes,
    ReviewedAt,
    ReviewedBy,
    ReviewNote,
    RejectReason,
    CreatedAt,
    UpdatedAt,
}
