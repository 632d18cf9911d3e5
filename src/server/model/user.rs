//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Role, UserStatus};

use crate::{
    model::{
        api::ListQueryDto,
        auth::RegisterDto,
        user::{
            AdminUpdateUserDto, CreateAccountDto, UpdateAccountDto, UpdateProfileDto, UserDto,
            UserSummaryDto,
        },
    },
    server::{
        error::AppError,
        util::{
            pagination::{parse_sort_by, PageParams, SortDir},
            parse::{parse_enum_param, search_term},
        },
    },
};

/// Registered account. `password_hash` stays inside the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
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

impl User {
    /// Converts an entity model at the repository boundary.
    ///
    /// The `tags` column holds a JSON array; unreadable content yields no tags.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let tags = entity
            .tags
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default();

        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            avatar_url: entity.avatar_url,
            bio: entity.bio,
            gender: entity.gender,
            phone: entity.phone,
            tags,
            weibo: entity.weibo,
            wechat: entity.wechat,
            status: entity.status,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar_url: self.avatar_url,
            bio: self.bio,
            gender: self.gender,
            phone: self.phone,
            tags: self.tags,
            weibo: self.weibo,
            wechat: self.wechat,
            status: self.status,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Name/email/avatar triple embedded in works, comments and participant lists.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            avatar_url: entity.avatar_url,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
        }
    }
}

/// Parameters for inserting a user row. The email must already be normalized.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Self-service registration input.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub weibo: Option<String>,
    pub wechat: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    CreatedAt,
    Name,
    Email,
}

#[derive(Debug, Clone)]
pub struct UserListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    /// Restricts results to these roles when non-empty.
    pub roles: Vec<Role>,
    pub sort_by: UserSortField,
    pub sort_dir: SortDir,
}

impl Default for UserListParam {
    fn default() -> Self {
        Self {
            page: PageParams::default(),
            search: None,
            status: None,
            roles: Vec::new(),
            sort_by: UserSortField::CreatedAt,
            sort_dir: SortDir::Desc,
        }
    }
}

/// Staff account creation by a super admin.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountParam {
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            avatar_url: dto.avatar_url,
            bio: dto.bio,
            gender: dto.gender,
            phone: dto.phone,
            weibo: dto.weibo,
            wechat: dto.wechat,
            tags: dto.tags,
        }
    }

    /// Admin edits are limited to name, bio and avatar.
    pub fn from_admin_dto(dto: AdminUpdateUserDto) -> Self {
        Self {
            name: dto.name,
            bio: dto.bio,
            avatar_url: dto.avatar_url,
            ..Default::default()
        }
    }
}

impl UserListParam {
    /// Builds list options from the query string; `sort_by` accepts
    /// `created_at`, `name` or `email`.
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
            roles: Vec::new(),
            sort_by: parse_sort_by(
                query.sort_by.as_deref(),
                &[
                    ("created_at", UserSortField::CreatedAt),
                    ("name", UserSortField::Name),
                    ("email", UserSortField::Email),
                ],
                UserSortField::CreatedAt,
            )?,
            sort_dir: SortDir::parse(query.sort_dir.as_deref(), SortDir::Desc)?,
        })
    }
}

impl CreateAccountParam {
    pub fn from_dto(dto: CreateAccountDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
        }
    }
}

impl UpdateAccountParam {
    pub fn from_dto(dto: UpdateAccountDto) -> Self {
        Self {
            name: dto.name,
            role: dto.role,
        }
    }
}
