use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_users_table::Users,
    m20260301_000007_create_activities_table::Activities,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityParticipants::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityParticipants::Id))
                    .col(integer(ActivityParticipants::ActivityId))
                    .col(integer(ActivityParticipants::UserId))
                    .col(string_len(ActivityParticipants::Status, 20).default("registered"))
                    .col(text_null(ActivityParticipants::Notes))
                    .col(
                        timestamp_with_time_zone(ActivityParticipants::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ActivityParticipants::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_participants_activity_id")
                            .from(ActivityParticipants::Table, ActivityParticipants::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_participants_user_id")
                            .from(ActivityParticipants::Table, ActivityParticipants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_participants_activity_user")
                    .table(ActivityParticipants::Table)
                    .col(ActivityParticipants::ActivityId)
                    .col(ActivityParticipants::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityParticipants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityParticipants {
    Table,
    Id,
    ActivityId,
    UserId,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
