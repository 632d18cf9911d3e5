use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ActivityStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Date,
    pub time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub status: ActivityStatus,
    /// Capacity limit, `0` means unlimited.
    pub max_participants: i32,
    pub deleted_at: Option<DateTimeUtc>,
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
