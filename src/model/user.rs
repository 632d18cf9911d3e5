use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Role, UserStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full user profile. The password hash is never serialized.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub tags: Vec<String>,
    pub weibo: Option<String>,
    pub wechat: Option<String>,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub avatar_url: Option<String>,
    #[validate(length(max = 500, message = "bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[validate(length(max = 20))]
    pub gender: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub weibo: Option<String>,
    #[validate(length(max = 100))]
    pub wechat: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct AdminUpdateUserDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct UpdateUserStatusDto {
    pub status: UserStatus,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateAccountDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateAccountDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AvatarDto {
    pub avatar_url: String,
}
