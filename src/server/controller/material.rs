use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        material::{CreateMaterialDto, UpdateMaterialDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::material::{
            CreateMaterialParam, Material, MaterialListParam, UpdateMaterialParam,
        },
        service::{
            material::MaterialService,
            upload::{MaterialUploadFields, UploadService, UploadedFile},
        },
        state::AppState,
        util::parse::parse_enum_param,
    },
};

/// Lists the material library, newest first.
///
/// # Arguments
/// - `query` - `page`, `per_page`, `search` (name or description) and `type`
pub async fn list_materials(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let param = MaterialListParam::from_query(&query)?;
    let page = MaterialService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Material::into_dto))))
}

pub async fn get_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let material = MaterialService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(material.into_dto()))))
}

/// Registers a material that is already hosted elsewhere.
pub async fn create_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateMaterialDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let material = MaterialService::new(&state.db)
        .create(CreateMaterialParam::from_dto(caller.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Material created", material.into_dto())),
    ))
}

/// Uploads a file into the material library.
///
/// Multipart fields: `file` (required), and optional `type`, `name`,
/// `description` and `tags`. Without `type` the kind is inferred from the
/// file's content type.
///
/// # Returns
/// - `201 Created` - Material pointing under `/uploads/materials/<type>/`
/// - `400 Bad Request` - No file, empty file or unknown type
pub async fn upload_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let mut file = None;
    let mut fields = MaterialUploadFields::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file = Some(UploadedFile {
                    file_name: field.file_name().map(str::to_string),
                    content_type: field.content_type().map(str::to_string),
                    bytes: field.bytes().await?,
                });
            }
            Some("type") => {
                let raw = field.text().await?;
                fields.material_type = parse_enum_param("type", Some(raw.trim()))?;
            }
            Some("name") => fields.name = Some(field.text().await?),
            Some("description") => fields.description = Some(field.text().await?),
            Some("tags") => fields.tags = Some(field.text().await?),
            _ => {}
        }
    }
    let file = file.ok_or_else(|| AppError::BadRequest("file is required".to_string()))?;

    let material = UploadService::new(&state.db, &state.upload_dir)
        .upload_material(caller.id, file, fields)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("File uploaded", material.into_dto())),
    ))
}

pub async fn update_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateMaterialDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let material = MaterialService::new(&state.db)
        .update(id, UpdateMaterialParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Material updated", material.into_dto())),
    ))
}

/// Deletes the material record. Any uploaded file stays on disk.
pub async fn delete_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    MaterialService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Material deleted"))))
}
