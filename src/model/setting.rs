use entity::sea_orm_active_enums::SettingValueType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SettingDto {
    pub key: String,
    pub value: String,
    pub value_type: SettingValueType,
}

/// Single-key upsert body. Any JSON value is accepted and normalized to text.
#[derive(Deserialize, Debug, Validate)]
pub struct UpdateSettingDto {
    pub value: serde_json::Value,
}

/// Bulk update body: `{"settings": {"site_name": "Maimang", "allow_signup": true}}`.
#[derive(Deserialize, Debug)]
pub struct UpdateSettingsDto {
    pub settings: serde_json::Map<String, serde_json::Value>,
}
