//! Staff account management and the startup super admin bootstrap.

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{
        normalize_email, CreateAccountParam, CreateUserParam, UpdateAccountParam, User,
        UserListParam,
    },
    service::password::hash_password,
    util::pagination::Page,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Lists staff accounts. Any role filter on `param` is replaced with the staff roles.
    pub async fn list(&self, mut param: UserListParam) -> Result<Page<User>, AppError> {
        param.roles = Role::STAFF.to_vec();
        let (users, total) = UserRepository::new(self.db).get_paginated(&param).await?;

        Ok(Page::new(users, total, param.page))
    }

    /// Creates an admin, editor or reviewer account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Role not assignable or email taken
    pub async fn create(&self, param: CreateAccountParam) -> Result<User, AppError> {
        ensure_assignable(param.role)?;

        let user_repo = UserRepository::new(self.db);
        let email = normalize_email(&param.email);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;
        let user = user_repo
            .create(CreateUserParam {
                name: param.name.trim().to_string(),
                email,
                password_hash,
                role: param.role,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::BadRequest("Email already exists".to_string())
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Created {:?} account {}", user.role, user.id);

        Ok(user)
    }

    /// Updates a staff account's name or role. Super admins are immutable.
    pub async fn update(
        &self,
        actor_id: i32,
        id: i32,
        param: UpdateAccountParam,
    ) -> Result<User, AppError> {
        if let Some(role) = param.role {
            ensure_assignable(role)?;
        }

        let user_repo = UserRepository::new(self.db);
        let target = self.find_account(id).await?;
        if target.role == Role::SuperAdmin {
            return Err(AuthError::ProtectedAccount(actor_id, id).into());
        }

        user_repo
            .update_account(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))
    }

    /// Deletes a staff account. Super admins cannot be deleted.
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let target = self.find_account(id).await?;
        if target.role == Role::SuperAdmin {
            return Err(AuthError::ProtectedAccount(actor_id, id).into());
        }

        UserRepository::new(self.db).delete(id).await?;
        tracing::info!("Account {} deleted by {}", id, actor_id);

        Ok(())
    }

    /// Creates the configured super admin when none exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Seed account created
    /// - `Ok(None)` - A super admin already exists, nothing done
    pub async fn ensure_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.super_admin_exists().await? {
            return Ok(None);
        }

        let password_hash = hash_password(password.to_string(), self.bcrypt_cost).await?;
        let user = user_repo
            .create(CreateUserParam {
                name: "Super Admin".to_string(),
                email: normalize_email(email),
                password_hash,
                role: Role::SuperAdmin,
            })
            .await?;

        Ok(Some(user))
    }

    async fn find_account(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|user| Role::STAFF.contains(&user.role))
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))
    }
}

fn ensure_assignable(role: Role) -> Result<(), AppError> {
    match role {
        Role::Admin | Role::Editor | Role::Reviewer => Ok(()),
        other => Err(AppError::BadRequest(format!(
            "Role {:?} cannot be assigned to a staff account",
            other
        ))),
    }
}
