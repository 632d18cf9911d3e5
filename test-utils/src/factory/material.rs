//! Material factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::MaterialType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MaterialFactory<'a> {
    db: &'a DatabaseConnection,
    uploader_id: i32,
    name: String,
    material_type: MaterialType,
}

impl<'a> MaterialFactory<'a> {
    /// Defaults to an image named `material-{id}.png`.
    pub fn new(db: &'a DatabaseConnection, uploader_id: i32) -> Self {
        Self {
            db,
            uploader_id,
            name: format!("material-{}.png", next_id()),
            material_type: MaterialType::Image,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn material_type(mut self, material_type: MaterialType) -> Self {
        self.material_type = material_type;
        self
    }

    pub async fn build(self) -> Result<entity::material::Model, DbErr> {
        let now = Utc::now();
        entity::material::ActiveModel {
            url: ActiveValue::Set(format!("/uploads/materials/{}", self.name)),
            name: ActiveValue::Set(self.name),
            material_type: ActiveValue::Set(self.material_type),
            size: ActiveValue::Set(1024),
            uploader_id: ActiveValue::Set(self.uploader_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_material(
    db: &DatabaseConnection,
    uploader_id: i32,
) -> Result<entity::material::Model, DbErr> {
    MaterialFactory::new(db, uploader_id).build().await
}
