//! Stores uploaded avatars and materials on disk under the upload directory.
//!
//! Files land in `<upload_dir>/avatars/` and `<upload_dir>/materials/<type>/`
//! and are served back through `/uploads/*`.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use entity::sea_orm_active_enums::MaterialType;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::{
        material::{material_type_dir, material_type_for, CreateMaterialParam, Material},
        user::User,
    },
    service::{material::MaterialService, user::UserService},
};

pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// A single file field read from a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or("")
    }

    /// Extension of the client file name including the dot, or `fallback`.
    fn extension(&self, fallback: &str) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Optional form fields accompanying a material upload.
#[derive(Debug, Clone, Default)]
pub struct MaterialUploadFields {
    pub material_type: Option<MaterialType>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

pub struct UploadService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Saves an avatar image and points the user's `avatar_url` at it.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Not an image or larger than 2 MiB
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn upload_avatar(&self, user_id: i32, file: UploadedFile) -> Result<User, AppError> {
        if !file.content_type().starts_with("image/") {
            return Err(AppError::BadRequest("Avatar must be an image".to_string()));
        }
        if file.bytes.len() > MAX_AVATAR_BYTES {
            return Err(AppError::BadRequest(
                "Avatar must not exceed 2 MiB".to_string(),
            ));
        }

        let file_name = stored_file_name(user_id, &file.extension(".jpg"));
        self.write(&["avatars"], &file_name, &file.bytes).await?;

        let url = format!("/uploads/avatars/{}", file_name);
        let user = UserService::new(self.db).set_avatar(user_id, url).await?;
        tracing::info!("User {} uploaded avatar {}", user_id, file_name);

        Ok(user)
    }

    /// Saves a material file and records it in the material library.
    ///
    /// The type comes from the form when given, otherwise from the content type.
    /// The name defaults to the client file name.
    pub async fn upload_material(
        &self,
        uploader_id: i32,
        file: UploadedFile,
        fields: MaterialUploadFields,
    ) -> Result<Material, AppError> {
        if file.bytes.is_empty() {
            return Err(AppError::BadRequest("file is empty".to_string()));
        }

        let material_type = fields
            .material_type
            .unwrap_or_else(|| material_type_for(file.content_type()));
        let type_dir = material_type_dir(material_type);

        let file_name = stored_file_name(uploader_id, &file.extension(".bin"));
        self.write(&["materials", type_dir], &file_name, &file.bytes)
            .await?;

        let name = fields
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| file.file_name.clone())
            .unwrap_or_else(|| file_name.clone());

        MaterialService::new(self.db)
            .create(CreateMaterialParam {
                name,
                material_type,
                size: file.bytes.len() as i64,
                url: format!("/uploads/materials/{}/{}", type_dir, file_name),
                description: fields.description,
                tags: fields.tags,
                uploader_id,
            })
            .await
    }

    async fn write(&self, dirs: &[&str], file_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let mut dir = self.upload_dir.to_path_buf();
        dir.extend(dirs);
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;

        Ok(path)
    }
}

/// `<uid>_<uuid><ext>`, unique per upload.
fn stored_file_name(user_id: i32, extension: &str) -> String {
    format!("{}_{}{}", user_id, uuid::Uuid::new_v4(), extension)
}
