//! Activity participant data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::ParticipantStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::activity::Participant;

pub struct ActivityParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the registration row for an (activity, user) pair.
    pub async fn find(
        &self,
        activity_id: i32,
        user_id: i32,
    ) -> Result<Option<Participant>, DbErr> {
        let entity = entity::prelude::ActivityParticipant::find()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .filter(entity::activity_participant::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| Participant::from_entity(e, None)))
    }

    /// Inserts a registration with status `registered`.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The new registration
    /// - `Err(DbErr)` - Database error, including a unique violation on
    ///   `(activity_id, user_id)` for a concurrent duplicate
    pub async fn create(&self, activity_id: i32, user_id: i32) -> Result<Participant, DbErr> {
        let now = Utc::now();
        let entity = entity::activity_participant::ActiveModel {
            activity_id: ActiveValue::Set(activity_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(ParticipantStatus::Registered),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Participant::from_entity(entity, None))
    }

    /// Deletes the registration for an (activity, user) pair.
    ///
    /// # Returns
    /// - `Ok(true)` - A registration was removed
    /// - `Ok(false)` - The user was not registered
    pub async fn delete(&self, activity_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ActivityParticipant::delete_many()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .filter(entity::activity_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists participants of an activity with their user summary, earliest registration first.
    pub async fn list_with_users(&self, activity_id: i32) -> Result<Vec<Participant>, DbErr> {
        let rows = entity::prelude::ActivityParticipant::find()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .order_by_asc(entity::activity_participant::Column::CreatedAt)
            .order_by_asc(entity::activity_participant::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(participant, user)| Participant::from_entity(participant, user))
            .collect())
    }
}
