use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MaterialType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MaterialDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub size: i64,
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub uploader_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateMaterialDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    #[validate(range(min = 0, message = "size must not be negative"))]
    pub size: Option<i64>,
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateMaterialDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<MaterialType>,
    pub description: Option<String>,
    pub tags: Option<String>,
}
