use crate::server::data::{activity_participant::ActivityParticipantRepository, is_unique_violation};
use entity::sea_orm_active_enums::ParticipantStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list_with_users;
