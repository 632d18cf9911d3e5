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
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcements::Id))
                    .col(string(Announcements::Title))
                    .col(text(Announcements::Content))
                    .col(string_len(Announcements::Status, 20).default("draft"))
                    .col(timestamp_with_time_zone_null(Announcements::PublishedAt))
                    .col(integer(Announcements::AuthorId))
                    .col(
                        timestamp_with_time_zone(Announcements::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Announcements::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcements_author_id")
                            .from(Announcements::Table, Announcements::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcements {
    Table,
    Id,
    Title,
    Content,
    Status,
    PublishedAt,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
