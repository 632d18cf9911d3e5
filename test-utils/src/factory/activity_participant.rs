//! Factory for activity registrations.

use chrono::Utc;
use entity::sea_orm_active_enums::ParticipantStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `registered` participant row for the given activity and user.
///
/// Bypasses the capacity and status checks, use it to arrange state.
pub async fn create_participant(
    db: &DatabaseConnection,
    activity_id: i32,
    user_id: i32,
) -> Result<entity::activity_participant::Model, DbErr> {
    let now = Utc::now();
    entity::activity_participant::ActiveModel {
        activity_id: ActiveValue::Set(activity_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(ParticipantStatus::Registered),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
