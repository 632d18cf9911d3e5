use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::Title))
                    .col(text_null(Events::Description))
                    .col(string_null(Events::BannerUrl))
                    .col(timestamp_with_time_zone_null(Events::StartAt))
                    .col(timestamp_with_time_zone_null(Events::EndAt))
                    .col(string_null(Events::Location))
                    .col(string_len(Events::Status, 20).default("planned"))
                    .col(
                        timestamp_with_time_zone(Events::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Events::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Title,
    Description,
    BannerUrl,
    StartAt,
    EndAt,
    Location,
    Status,
    CreatedAt,
    UpdatedAt,
}
