//! User data repository for database operations.
//!
//! Handles account creation, profile and status updates, paginated listing with
//! search and sorting, and the lookups used by login and startup bootstrap.

use chrono::Utc;
use entity::sea_orm_active_enums::{Role, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateUserParam, UpdateAccountParam, UpdateProfileParam, User, UserListParam, UserSortField,
};
use crate::server::util::search::contains_ci;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, normalized email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with status `active`
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            status: ActiveValue::Set(UserStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether at least one super admin exists.
    ///
    /// Used during startup to decide whether to create the seed account.
    pub async fn super_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::SuperAdmin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a successful login.
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::LastLoginAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, or tags failed to serialize
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(avatar_url) = param.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(bio) = param.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(weibo) = param.weibo {
            active.weibo = ActiveValue::Set(Some(weibo));
        }
        if let Some(wechat) = param.wechat {
            active.wechat = ActiveValue::Set(Some(wechat));
        }
        if let Some(tags) = param.tags {
            let encoded =
                serde_json::to_string(&tags).map_err(|e| DbErr::Custom(e.to_string()))?;
            active.tags = ActiveValue::Set(Some(encoded));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(User::from_entity(entity)))
    }

    /// Sets the account status.
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(User::from_entity(entity)))
    }

    /// Updates a staff account's name and role.
    pub async fn update_account(
        &self,
        id: i32,
        param: UpdateAccountParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets users with pagination, search, status/role filters and sorting.
    ///
    /// Search matches name or email as a substring.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, param: &UserListParam) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::user::Column::Name, search))
                    .add(contains_ci(entity::user::Column::Email, search)),
            );
        }
        if let Some(status) = param.status {
            query = query.filter(entity::user::Column::Status.eq(status));
        }
        if !param.roles.is_empty() {
            query = query.filter(entity::user::Column::Role.is_in(param.roles.clone()));
        }

        let column = match param.sort_by {
            UserSortField::CreatedAt => entity::user::Column::CreatedAt,
            UserSortField::Name => entity::user::Column::Name,
            UserSortField::Email => entity::user::Column::Email,
        };

        let paginator = query
            .order_by(column, param.sort_dir.order())
            .order_by(entity::user::Column::Id, param.sort_dir.order())
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }
}
