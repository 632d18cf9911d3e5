use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{Role, UserStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    /// JSON array of tag strings.
    pub tags: Option<String>,
    pub weibo: Option<String>,
    pub wechat: Option<String>,
    pub status: UserStatus,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activity_participant::Entity")]
    ActivityParticipant,
}

impl Related<super::activity_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
