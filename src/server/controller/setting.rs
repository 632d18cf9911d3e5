use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        setting::{UpdateSettingDto, UpdateSettingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Returns every setting as a flat `key -> value` map.
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let settings = SettingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(settings))))
}

/// Upserts several settings at once. Either all keys are written or none.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins may change settings
///
/// # Returns
/// - `200 OK` - Settings saved
/// - `400 Bad Request` - Malformed body or a blank key
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    SettingService::new(&state.db)
        .update_many(payload.settings)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Settings updated"))))
}

pub async fn get_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let setting = SettingService::new(&state.db).get(&key).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(setting.into_dto()))))
}

pub async fn update_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    let setting = SettingService::new(&state.db)
        .update(&key, &payload.value)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Setting updated", setting.into_dto())),
    ))
}
