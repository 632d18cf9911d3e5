//! Album factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_album(db: &DatabaseConnection) -> Result<entity::album::Model, DbErr> {
    let now = Utc::now();
    entity::album::ActiveModel {
        title: ActiveValue::Set(format!("Album {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
