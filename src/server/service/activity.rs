//! Activity administration and capacity-checked registration.

use entity::sea_orm_active_enums::ActivityStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        activity::ActivityRepository, activity_participant::ActivityParticipantRepository,
        is_unique_violation,
    },
    error::AppError,
    model::activity::{
        Activity, ActivityListParam, CreateActivityParam, Participant, UpdateActivityParam,
    },
    util::pagination::{Page, PageParams},
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, param: &ActivityListParam) -> Result<Page<Activity>, AppError> {
        let (activities, total) = ActivityRepository::new(self.db)
            .get_paginated(param)
            .await?;

        Ok(Page::new(activities, total, param.page))
    }

    pub async fn get(&self, id: i32) -> Result<Activity, AppError> {
        ActivityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(activity_not_found)
    }

    /// Lists activities the user registered for.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: PageParams,
    ) -> Result<Page<Activity>, AppError> {
        let (activities, total) = ActivityRepository::new(self.db)
            .get_paginated_for_user(user_id, page)
            .await?;

        Ok(Page::new(activities, total, page))
    }

    pub async fn create(&self, param: CreateActivityParam) -> Result<Activity, AppError> {
        let activity = ActivityRepository::new(self.db).create(param).await?;
        tracing::info!("Activity {} created", activity.id);

        Ok(activity)
    }

    pub async fn update(&self, id: i32, param: UpdateActivityParam) -> Result<Activity, AppError> {
        ActivityRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(activity_not_found)
    }

    pub async fn update_status(&self, id: i32, status: ActivityStatus) -> Result<Activity, AppError> {
        ActivityRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(activity_not_found)
    }

    /// Soft-deletes an activity. Its registrations are kept for statistics.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ActivityRepository::new(self.db).soft_delete(id).await? {
            return Err(activity_not_found());
        }
        tracing::info!("Activity {} deleted", id);

        Ok(())
    }

    /// Lists participants of a live activity in registration order.
    pub async fn participants(&self, id: i32) -> Result<Vec<Participant>, AppError> {
        self.get(id).await?;

        Ok(ActivityParticipantRepository::new(self.db)
            .list_with_users(id)
            .await?)
    }

    /// Registers a user for an activity.
    ///
    /// Runs in one transaction holding an exclusive lock on the activity row,
    /// so concurrent registrations cannot both pass the capacity check. The
    /// unique index on `(activity_id, user_id)` backs the duplicate check.
    ///
    /// # Returns
    /// - `Ok(Participant)` - Registration created with status `registered`
    /// - `Err(AppError::NotFound)` - Activity missing or soft-deleted
    /// - `Err(AppError::BadRequest)` - Not upcoming, already registered, or full
    pub async fn register(&self, activity_id: i32, user_id: i32) -> Result<Participant, AppError> {
        let txn = self.db.begin().await?;
        let activity_repo = ActivityRepository::new(&txn);
        let participant_repo = ActivityParticipantRepository::new(&txn);

        let activity = activity_repo
            .find_for_update(activity_id)
            .await?
            .ok_or_else(activity_not_found)?;

        if activity.status != ActivityStatus::Upcoming {
            return Err(AppError::BadRequest(
                "Activity is not open for registration".to_string(),
            ));
        }

        if participant_repo.find(activity_id, user_id).await?.is_some() {
            return Err(already_registered());
        }

        if activity.is_full() {
            return Err(AppError::BadRequest("Activity is full".to_string()));
        }

        let participant = participant_repo
            .create(activity_id, user_id)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    already_registered()
                } else {
                    e.into()
                }
            })?;

        txn.commit().await?;
        tracing::info!("User {} registered for activity {}", user_id, activity_id);

        Ok(participant)
    }

    /// Removes a user's registration.
    ///
    /// # Returns
    /// - `Ok(())` - Registration removed
    /// - `Err(AppError::NotFound)` - The user was not registered
    pub async fn unregister(&self, activity_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !ActivityParticipantRepository::new(&txn)
            .delete(activity_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Not registered for this activity".to_string(),
            ));
        }

        txn.commit().await?;
        tracing::info!("User {} unregistered from activity {}", user_id, activity_id);

        Ok(())
    }
}

fn activity_not_found() -> AppError {
    AppError::NotFound("Activity not found".to_string())
}

fn already_registered() -> AppError {
    AppError::BadRequest("Already registered for this activity".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{
            activity::{create_activity, create_activity_with_capacity, ActivityFactory},
            activity_participant::create_participant,
            user::create_user,
        },
    };

    fn bad_request_message(result: Result<Participant, AppError>) -> String {
        match result {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected BadRequest, got {:?}", other.map(|p| p.id)),
        }
    }

    /// Tests a registration on an open activity with free capacity.
    ///
    /// Expected: Ok(Participant) with status registered and count 1
    #[tokio::test]
    async fn registers_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;
        let activity = create_activity_with_capacity(db, 2).await?;
        let service = ActivityService::new(db);

        let participant = service.register(activity.id, user.id).await?;

        assert_eq!(participant.user_id, user.id);
        assert_eq!(
            participant.status,
            entity::sea_orm_active_enums::ParticipantStatus::Registered
        );
        assert_eq!(service.get(activity.id).await?.current_participants, 1);

        Ok(())
    }

    /// Tests registering twice for the same activity.
    ///
    /// Expected: second call fails with "Already registered for this activity"
    #[tokio::test]
    async fn rejects_duplicate_registration() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;
        let activity = create_activity(db).await?;
        let service = ActivityService::new(db);

        service.register(activity.id, user.id).await?;
        let result = service.register(activity.id, user.id).await;

        assert_eq!(
            bad_request_message(result),
            "Already registered for this activity"
        );
        assert_eq!(service.get(activity.id).await?.current_participants, 1);

        Ok(())
    }

    /// Tests capacity enforcement once max_participants is reached.
    ///
    /// Expected: third user rejected with "Activity is full"
    #[tokio::test]
    async fn enforces_capacity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let activity = create_activity_with_capacity(db, 2).await?;
        let service = ActivityService::new(db);

        for _ in 0..2 {
            let user = create_user(db).await?;
            service.register(activity.id, user.id).await?;
        }
        let late = create_user(db).await?;
        let result = service.register(activity.id, late.id).await;

        assert_eq!(bad_request_message(result), "Activity is full");
        assert_eq!(service.get(activity.id).await?.current_participants, 2);

        Ok(())
    }

    /// Tests zero capacity means unlimited.
    ///
    /// Expected: every registration succeeds
    #[tokio::test]
    async fn zero_capacity_is_unlimited() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let activity = create_activity_with_capacity(db, 0).await?;
        let service = ActivityService::new(db);

        for _ in 0..5 {
            let user = create_user(db).await?;
            service.register(activity.id, user.id).await?;
        }

        assert_eq!(service.get(activity.id).await?.current_participants, 5);

        Ok(())
    }

    /// Tests registration is refused unless the activity is upcoming.
    ///
    /// Expected: "Activity is not open for registration" for ongoing/completed/cancelled
    #[tokio::test]
    async fn requires_upcoming_status() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;
        let service = ActivityService::new(db);

        for status in [
            ActivityStatus::Ongoing,
            ActivityStatus::Completed,
            ActivityStatus::Cancelled,
        ] {
            let activity = ActivityFactory::new(db).status(status).build().await?;
            let result = service.register(activity.id, user.id).await;

            assert_eq!(
                bad_request_message(result),
                "Activity is not open for registration"
            );
        }

        Ok(())
    }

    /// Tests missing and soft-deleted activities are both not found.
    ///
    /// Expected: Err(AppError::NotFound("Activity not found"))
    #[tokio::test]
    async fn rejects_missing_or_deleted_activity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;
        let deleted = ActivityFactory::new(db).deleted().build().await?;
        let service = ActivityService::new(db);

        for id in [deleted.id, 9999] {
            match service.register(id, user.id).await {
                Err(AppError::NotFound(msg)) => assert_eq!(msg, "Activity not found"),
                other => panic!("expected NotFound, got {:?}", other.map(|p| p.id)),
            }
        }

        Ok(())
    }

    /// Tests unregistering frees a slot and a second unregister fails.
    ///
    /// Expected: Ok then NotFound("Not registered for this activity")
    #[tokio::test]
    async fn unregisters_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;
        let activity = create_activity_with_capacity(db, 1).await?;
        create_participant(db, activity.id, user.id).await?;
        let service = ActivityService::new(db);

        service.unregister(activity.id, user.id).await?;
        assert_eq!(service.get(activity.id).await?.current_participants, 0);

        match service.unregister(activity.id, user.id).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Not registered for this activity"),
            other => panic!("expected NotFound, got {:?}", other),
        }

        Ok(())
    }

    /// Tests soft delete hides the activity from reads and list results.
    ///
    /// Expected: get returns NotFound, list total drops, second delete NotFound
    #[tokio::test]
    async fn soft_deletes_activity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_activity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keep = create_activity(db).await?;
        let remove = create_activity(db).await?;
        let service = ActivityService::new(db);

        service.delete(remove.id).await?;

        assert!(matches!(service.get(remove.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(remove.id).await, Err(AppError::NotFound(_))));
        let page = service.list(&ActivityListParam::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, keep.id);

        Ok(())
    }
}
