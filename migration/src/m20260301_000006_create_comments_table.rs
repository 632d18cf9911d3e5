use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_users_table::Users, m20260301_000005_create_works_table::Works,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::Id))
                    .col(text(Comments::Content))
                    .col(string_len(Comments::Status, 20).default("pending"))
                    .col(integer(Comments::AuthorId))
                    .col(integer(Comments::WorkId))
                    .col(integer(Comments::Likes).default(0))
                    .col(integer(Comments::Replies).default(0))
                    .col(timestamp_with_time_zone_null(Comments::ReviewedAt))
                    .col(integer_null(Comments::ReviewedBy))
                    .col(timestamp_with_time_zone_null(Comments::DeletedAt))
                    .col(
                        timestamp_with_time_zone(Comments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Comments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author_id")
                            .from(Comments::Table, Comments::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_work_id")
                            .from(Comments::Table, Comments::WorkId)
                            .to(Works::Table, Works::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_reviewed_by")
                            .from(Comments::Table, Comments::ReviewedBy)
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
                    .name("idx_comments_work_id")
                    .table(Comments::Table)
                    .col(Comments::WorkId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comments {
    Table,
    Id,
    Content,
    Status,
    AuthorId,
    WorkId,
    Likes,
    Replies,
    ReviewedAt,
    ReviewedBy,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
