//! Material library domain model.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MaterialType;

use crate::{
    model::{
        api::ListQueryDto,
        material::{CreateMaterialDto, MaterialDto, UpdateMaterialDto},
    },
    server::{
        error::AppError,
        util::{
            pagination::PageParams,
            parse::{parse_enum_param, search_term},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i32,
    pub name: String,
    pub material_type: MaterialType,
    pub size: i64,
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub uploader_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Material {
    pub fn from_entity(entity: entity::material::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            material_type: entity.material_type,
            size: entity.size,
            url: entity.url,
            description: entity.description,
            tags: entity.tags,
            uploader_id: entity.uploader_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MaterialDto {
        MaterialDto {
            id: self.id,
            name: self.name,
            material_type: self.material_type,
            size: self.size,
            url: self.url,
            description: self.description,
            tags: self.tags,
            uploader_id: self.uploader_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMaterialParam {
    pub name: String,
    pub material_type: MaterialType,
    pub size: i64,
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub uploader_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMaterialParam {
    pub name: Option<String>,
    pub material_type: Option<MaterialType>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MaterialListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub material_type: Option<MaterialType>,
}

/// Infers the material type from a MIME type; anything unrecognized is a document.
pub fn material_type_for(content_type: &str) -> MaterialType {
    if content_type.starts_with("image/") {
        MaterialType::Image
    } else if content_type.starts_with("video/") {
        MaterialType::Video
    } else if content_type.starts_with("audio/") {
        MaterialType::Audio
    } else {
        MaterialType::Document
    }
}

/// Directory segment used under `materials/`.
pub fn material_type_dir(material_type: MaterialType) -> &'static str {
    match material_type {
        MaterialType::Image => "image",
        MaterialType::Document => "document",
        MaterialType::Video => "video",
        MaterialType::Audio => "audio",
    }
}

impl CreateMaterialParam {
    pub fn from_dto(uploader_id: i32, dto: CreateMaterialDto) -> Self {
        Self {
            name: dto.name,
            material_type: dto.material_type,
            size: dto.size.unwrap_or(0),
            url: dto.url,
            description: dto.description,
            tags: dto.tags,
            uploader_id,
        }
    }
}

impl UpdateMaterialParam {
    pub fn from_dto(dto: UpdateMaterialDto) -> Self {
        Self {
            name: dto.name,
            material_type: dto.material_type,
            description: dto.description,
            tags: dto.tags,
        }
    }
}

impl MaterialListParam {
    /// `type` filters by material type.
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            material_type: parse_enum_param("type", query.kind.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_type_from_content_type() {
        assert_eq!(material_type_for("image/png"), MaterialType::Image);
        assert_eq!(material_type_for("video/mp4"), MaterialType::Video);
        assert_eq!(material_type_for("audio/mpeg"), MaterialType::Audio);
        assert_eq!(material_type_for("application/pdf"), MaterialType::Document);
        assert_eq!(material_type_for(""), MaterialType::Document);
    }
}
