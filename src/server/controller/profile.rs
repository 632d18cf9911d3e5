//! Endpoints for the signed-in member's own profile, works and activities.

use axum::{
    extract::{Multipart, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        user::{AvatarDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ValidatedJson},
        model::{
            activity::Activity,
            user::UpdateProfileParam,
            work::{Work, WorkListParam},
        },
        service::{
            activity::ActivityService,
            upload::{UploadService, UploadedFile},
            user::UserService,
            work::WorkService,
        },
        state::AppState,
        util::pagination::PageParams,
    },
};

pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = UserService::new(&state.db).get(caller.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Partially updates the caller's profile. Absent fields are left unchanged.
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = UserService::new(&state.db)
        .update_profile(caller.id, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Profile updated", user.into_dto())),
    ))
}

/// Lists the caller's works in every status.
///
/// Accepts the usual `search`, `status`, `type`, `sort_by` and `sort_dir` filters.
pub async fn list_my_works(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let page = WorkService::new(&state.db)
        .list_by_author(caller.id, WorkListParam::from_query(&query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Work::into_dto))))
}

pub async fn list_my_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let page = ActivityService::new(&state.db)
        .list_for_user(caller.id, PageParams::new(query.page, query.per_page))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Activity::into_dto))))
}

/// Uploads a new avatar from the multipart field `avatar`.
///
/// # Returns
/// - `200 OK` - `{avatar_url}` pointing under `/uploads/avatars/`
/// - `400 Bad Request` - Field missing, not an image, or larger than 2 MiB
/// - `401 Unauthorized` - Missing or invalid token
pub async fn upload_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let mut avatar = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("avatar") {
            avatar = Some(UploadedFile {
                file_name: field.file_name().map(str::to_string),
                content_type: field.content_type().map(str::to_string),
                bytes: field.bytes().await?,
            });
        }
    }
    let avatar =
        avatar.ok_or_else(|| AppError::BadRequest("avatar file is required".to_string()))?;

    let user = UploadService::new(&state.db, &state.upload_dir)
        .upload_avatar(caller.id, avatar)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Avatar uploaded",
            AvatarDto {
                avatar_url: user.avatar_url.unwrap_or_default(),
            },
        )),
    ))
}
