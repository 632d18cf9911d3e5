//! Material data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::material::{
    CreateMaterialParam, Material, MaterialListParam, UpdateMaterialParam,
};
use crate::server::util::search::contains_ci;

pub struct MaterialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Material>, DbErr> {
        let entity = entity::prelude::Material::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Material::from_entity))
    }

    /// Gets materials newest first, searching name and description.
    pub async fn get_paginated(
        &self,
        param: &MaterialListParam,
    ) -> Result<(Vec<Material>, u64), DbErr> {
        let mut query = entity::prelude::Material::find();

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::material::Column::Name, search))
                    .add(contains_ci(entity::material::Column::Description, search)),
            );
        }
        if let Some(material_type) = param.material_type {
            query = query.filter(entity::material::Column::MaterialType.eq(material_type));
        }

        let paginator = query
            .order_by_desc(entity::material::Column::CreatedAt)
            .order_by_desc(entity::material::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(Material::from_entity).collect(), total))
    }

    pub async fn create(&self, param: CreateMaterialParam) -> Result<Material, DbErr> {
        let now = Utc::now();
        let entity = entity::material::ActiveModel {
            name: ActiveValue::Set(param.name),
            material_type: ActiveValue::Set(param.material_type),
            size: ActiveValue::Set(param.size),
            url: ActiveValue::Set(param.url),
            description: ActiveValue::Set(param.description),
            tags: ActiveValue::Set(param.tags),
            uploader_id: ActiveValue::Set(param.uploader_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Material::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateMaterialParam,
    ) -> Result<Option<Material>, DbErr> {
        let Some(entity) = entity::prelude::Material::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(material_type) = param.material_type {
            active.material_type = ActiveValue::Set(material_type);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(tags) = param.tags {
            active.tags = ActiveValue::Set(Some(tags));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Material::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Material::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
