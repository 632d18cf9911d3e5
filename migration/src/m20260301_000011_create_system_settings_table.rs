use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemSettings::Id))
                    .col(string_len_uniq(SystemSettings::Key, 100))
                    .col(text(SystemSettings::Value))
                    .col(string_len(SystemSettings::ValueType, 20).default("string"))
                    .col(
                        timestamp_with_time_zone(SystemSettings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SystemSettings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemSettings {
    Table,
    Id,
    Key,
    Value,
    ValueType,
    CreatedAt,
    UpdatedAt,
}
