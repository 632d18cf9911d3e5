//! Super-admin management of staff accounts (admin, editor, reviewer).

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        user::{CreateAccountDto, UpdateAccountDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::user::{CreateAccountParam, UpdateAccountParam, User, UserListParam},
        service::account::AccountService,
        state::AppState,
    },
};

pub async fn list_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    let page = AccountService::new(&state.db, state.bcrypt_cost)
        .list(UserListParam::from_query(&query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

/// Creates a staff account.
///
/// # Returns
/// - `201 Created` - New account
/// - `400 Bad Request` - Role is not admin/editor/reviewer or email is taken
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    let user = AccountService::new(&state.db, state.bcrypt_cost)
        .create(CreateAccountParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Account created", user.into_dto())),
    ))
}

pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    let user = AccountService::new(&state.db, state.bcrypt_cost)
        .update(caller.id, id, UpdateAccountParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Account updated", user.into_dto())),
    ))
}

pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;

    AccountService::new(&state.db, state.bcrypt_cost)
        .delete(caller.id, id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Account deleted"))))
}
