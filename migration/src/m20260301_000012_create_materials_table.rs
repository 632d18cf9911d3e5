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
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(pk_auto(Materials::Id))
                    .col(string(Materials::Name))
                    .col(string_len(Materials::Type, 20))
                    .col(big_integer(Materials::Size).default(0))
                    .col(string(Materials::Url))
                    .col(text_null(Materials::Description))
                    .col(string_null(Materials::Tags))
                    .col(integer(Materials::UploaderId))
                    .col(
                        timestamp_with_time_zone(Materials::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Materials::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_materials_uploader_id")
                            .from(Materials::Table, Materials::UploaderId)
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
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Materials {
    Table,
    Id,
    Name,
    Type,
    Size,
    Url,
    Description,
    Tags,
    UploaderId,
    CreatedAt,
    UpdatedAt,
}
