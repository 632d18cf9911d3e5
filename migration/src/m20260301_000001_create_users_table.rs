use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Name, 100))
                    .col(string_len_uniq(Users::Email, 255))
                    .col(string(Users::PasswordHash))
                    .col(string_len(Users::Role, 20).default("member"))
                    .col(string_null(Users::AvatarUrl))
                    .col(text_null(Users::Bio))
                    .col(string_len_null(Users::Gender, 20))
                    .col(string_len_null(Users::Phone, 20))
                    .col(text_null(Users::Tags))
                    .col(string_null(Users::Weibo))
                    .col(string_null(Users::Wechat))
                    .col(string_len(Users::Status, 20).default("active"))
                    .col(timestamp_with_time_zone_null(Users::LastLoginAt))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    AvatarUrl,
    Bio,
    Gender,
    Phone,
    Tags,
    Weibo,
    Wechat,
    Status,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
