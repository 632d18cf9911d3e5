//! Profile self-service and admin user management.

use entity::sea_orm_active_enums::{Role, UserStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpdateProfileParam, User, UserListParam},
    util::pagination::Page,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial profile update to the user.
    ///
    /// Used both by users editing themselves and by admins editing others.
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Points the user's avatar at an uploaded file URL.
    pub async fn set_avatar(&self, id: i32, avatar_url: String) -> Result<User, AppError> {
        self.update_profile(
            id,
            UpdateProfileParam {
                avatar_url: Some(avatar_url),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn list(&self, param: &UserListParam) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(users, total, param.page))
    }

    pub async fn update_status(&self, id: i32, status: UserStatus) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} status set to {:?}", id, status);

        Ok(user)
    }

    /// Deletes a user account.
    ///
    /// # Arguments
    /// - `actor_id` - Id of the super admin performing the deletion
    /// - `id` - Target user id
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AuthError::ProtectedAccount)` - Target is a super admin
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let target = self.get(id).await?;

        if target.role == Role::SuperAdmin {
            return Err(AuthError::ProtectedAccount(actor_id, id).into());
        }

        user_repo.delete(id).await?;
        tracing::info!("User {} deleted by {}", id, actor_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::user::{create_user, create_user_with_role},
    };

    /// Tests profile updates only touch provided fields and round-trip tags.
    ///
    /// Expected: bio and tags changed, name preserved
    #[tokio::test]
    async fn updates_profile_partially() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;

        let updated = UserService::new(db)
            .update_profile(
                user.id,
                UpdateProfileParam {
                    bio: Some("Writes haiku at dawn".to_string()),
                    tags: Some(vec!["poetry".to_string(), "haiku".to_string()]),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.name, user.name);
        assert_eq!(updated.bio.as_deref(), Some("Writes haiku at dawn"));
        assert_eq!(updated.tags, vec!["poetry", "haiku"]);

        Ok(())
    }

    /// Tests missing users surface as NotFound.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn reports_missing_user() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db).get(404).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests super admins cannot be deleted while regular users can.
    ///
    /// Expected: ProtectedAccount for super admin, Ok for member
    #[tokio::test]
    async fn protects_super_admin_from_deletion() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let root = create_user_with_role(db, Role::SuperAdmin).await?;
        let member = create_user(db).await?;
        let service = UserService::new(db);

        let result = service.delete(root.id, root.id).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::ProtectedAccount(_, _)))
        ));

        service.delete(root.id, member.id).await?;
        assert!(matches!(service.get(member.id).await, Err(AppError::NotFound(_))));

        Ok(())
    }
}
