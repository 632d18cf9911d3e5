use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carousels::Table)
                    .if_not_exists()
                    .col(pk_auto(Carousels::Id))
                    .col(string(Carousels::Title))
                    .col(string(Carousels::ImageUrl))
                    .col(string_null(Carousels::LinkUrl))
                    .col(text_null(Carousels::Description))
                    .col(string_len(Carousels::Status, 20).default("active"))
                    .col(integer(Carousels::SortOrder).default(0))
                    .col(
                        timestamp_with_time_zone(Carousels::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Carousels::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Carousels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Carousels {
    Table,
    Id,
    Title,
    ImageUrl,
    LinkUrl,
    Description,
    Status,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
