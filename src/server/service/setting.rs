//! System settings: reads for staff, upserts for super admins.

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::system_setting::SystemSettingRepository,
    error::AppError,
    model::setting::{normalize_value, Setting},
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every setting as a `key -> stored value` map.
    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let settings = SystemSettingRepository::new(self.db).get_all().await?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }

    pub async fn get(&self, key: &str) -> Result<Setting, AppError> {
        SystemSettingRepository::new(self.db)
            .find(key)
            .await?
            .ok_or_else(|| AppError::NotFound("Setting not found".to_string()))
    }

    /// Upserts every entry of `settings` in one transaction.
    ///
    /// Either all keys are written or none are.
    pub async fn update_many(&self, settings: Map<String, Value>) -> Result<(), AppError> {
        if settings.keys().any(|k| k.trim().is_empty()) {
            return Err(AppError::BadRequest("Setting key is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let setting_repo = SystemSettingRepository::new(&txn);

        for (key, value) in &settings {
            let (stored, value_type) = normalize_value(value);
            setting_repo.upsert(key, stored, value_type).await?;
        }

        txn.commit().await?;
        tracing::info!("Updated {} system settings", settings.len());

        Ok(())
    }

    /// Upserts a single key and returns the stored setting.
    pub async fn update(&self, key: &str, value: &Value) -> Result<Setting, AppError> {
        if key.trim().is_empty() {
            return Err(AppError::BadRequest("Setting key is required".to_string()));
        }

        let setting_repo = SystemSettingRepository::new(self.db);
        let (stored, value_type) = normalize_value(value);
        setting_repo.upsert(key, stored, value_type).await?;

        setting_repo
            .find(key)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Setting {} vanished after upsert", key)))
    }
}
