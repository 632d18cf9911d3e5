//! Material library management for editors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::material::MaterialRepository,
    error::AppError,
    model::material::{CreateMaterialParam, Material, MaterialListParam, UpdateMaterialParam},
    util::pagination::Page,
};

pub struct MaterialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, param: &MaterialListParam) -> Result<Page<Material>, AppError> {
        let (materials, total) = MaterialRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(materials, total, param.page))
    }

    pub async fn get(&self, id: i32) -> Result<Material, AppError> {
        MaterialRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(material_not_found)
    }

    pub async fn create(&self, param: CreateMaterialParam) -> Result<Material, AppError> {
        let material = MaterialRepository::new(self.db).create(param).await?;
        tracing::info!(
            "User {} added material {} ({})",
            material.uploader_id,
            material.id,
            material.url
        );

        Ok(material)
    }

    pub async fn update(&self, id: i32, param: UpdateMaterialParam) -> Result<Material, AppError> {
        MaterialRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(material_not_found)
    }

    /// Removes the record only; the stored file is left in place.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MaterialRepository::new(self.db).delete(id).await? {
            return Err(material_not_found());
        }

        Ok(())
    }
}

fn material_not_found() -> AppError {
    AppError::NotFound("Material not found".to_string())
}
