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
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(pk_auto(Articles::Id))
                    .col(string(Articles::Title))
                    .col(string_uniq(Articles::Slug))
                    .col(text_null(Articles::Summary))
                    .col(text_null(Articles::Content))
                    .col(string_null(Articles::CoverUrl))
                    .col(string_len(Articles::Status, 20).default("draft"))
                    .col(integer_null(Articles::AuthorId))
                    .col(
                        timestamp_with_time_zone(Articles::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Articles::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_author_id")
                            .from(Articles::Table, Articles::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Articles {
    Table,
    Id,
    Title,
    Slug,
    Summary,
    Content,
    CoverUrl,
    Status,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
