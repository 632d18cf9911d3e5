//! System setting data repository.
//!
//! Writes are `INSERT ... ON CONFLICT (key) DO UPDATE` upserts; the repository is
//! generic over the connection so a bulk update can share one transaction.

use chrono::Utc;
use entity::sea_orm_active_enums::SettingValueType;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::setting::Setting;

pub struct SystemSettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SystemSettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Setting>, DbErr> {
        let entities = entity::prelude::SystemSetting::find()
            .order_by_asc(entity::system_setting::Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Setting::from_entity).collect())
    }

    pub async fn find(&self, key: &str) -> Result<Option<Setting>, DbErr> {
        let entity = entity::prelude::SystemSetting::find()
            .filter(entity::system_setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(Setting::from_entity))
    }

    /// Inserts the key or overwrites its value and type.
    pub async fn upsert(
        &self,
        key: &str,
        value: String,
        value_type: SettingValueType,
    ) -> Result<(), DbErr> {
        let now = Utc::now();
        let model = entity::system_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            value_type: ActiveValue::Set(value_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::SystemSetting::insert(model)
            .on_conflict(
                OnConflict::column(entity::system_setting::Column::Key)
                    .update_columns([
                        entity::system_setting::Column::Value,
                        entity::system_setting::Column::ValueType,
                        entity::system_setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
