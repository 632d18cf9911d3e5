use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        user::{AdminUpdateUserDto, UpdateUserStatusDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::user::{UpdateProfileParam, User, UserListParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Lists all users for the admin console.
///
/// # Access Control
/// - `Admin` - Any admin console role
///
/// # Arguments
/// - `query` - `page`, `per_page`, `search` (name or email), `status`,
///   `sort_by` (`created_at`, `name`, `email`) and `sort_dir`
///
/// # Returns
/// - `200 OK` - Paginated users
/// - `400 Bad Request` - Unknown status or sort field
/// - `401 Unauthorized` / `403 Forbidden` - Missing token or insufficient role
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let param = UserListParam::from_query(&query)?;
    let page = UserService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Edits the public profile fields of any user.
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AdminUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let user = UserService::new(&state.db)
        .update_profile(id, UpdateProfileParam::from_admin_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("User updated", user.into_dto())),
    ))
}

/// Activates, deactivates or bans a user.
pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let user = UserService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Status updated", user.into_dto())),
    ))
}

/// Deletes a user.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins may delete users
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - Caller tried to delete their own account
/// - `404 Not Found` - No user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    UserService::new(&state.db).delete(caller.id, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("User deleted"))))
}
