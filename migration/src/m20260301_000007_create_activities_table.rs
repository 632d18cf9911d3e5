use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(pk_auto(Activities::Id))
                    .col(string(Activities::Title))
                    .col(text_null(Activities::Description))
                    .col(string_null(Activities::ImageUrl))
                    .col(date(Activities::Date))
                    .col(string_len_null(Activities::Time, 50))
                    .col(string_null(Activities::Location))
                    .col(string_len_null(Activities::Instructor, 100))
                    .col(string_len(Activities::Status, 20).default("upcoming"))
                    .col(integer(Activities::MaxParticipants).default(0))
                    .col(timestamp_with_time_zone_null(Activities::DeletedAt))
                    .col(
                        timestamp_with_time_zone(Activities::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Activities::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activities {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Date,
    Time,
    Location,
    Instructor,
    Status,
    MaxParticipants,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
