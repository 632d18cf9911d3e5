use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        work::{CreateWorkDto, LikesDto, ReviewWorkDto, UpdateWorkDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::work::{CreateWorkParam, UpdateWorkParam, Work, WorkListParam, WorkReview},
        service::work::WorkService,
        state::AppState,
    },
};

/// Lists approved works.
///
/// # Arguments
/// - `query` - `page`, `per_page`, `search` (title or content), `type`,
///   `sort_by` (`created_at`, `views`, `likes`, `title`) and `sort_dir`
///
/// # Returns
/// - `200 OK` - Paginated works with author summaries
/// - `400 Bad Request` - Unknown type or sort field
pub async fn list_works(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = WorkService::new(&state.db)
        .list_public(WorkListParam::from_query(&query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Work::into_dto))))
}

/// Gets an approved work. Each call counts as one view.
pub async fn get_work(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let work = WorkService::new(&state.db).view(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(work.into_dto()))))
}

/// Submits a work for review.
///
/// # Returns
/// - `201 Created` - The work in `pending` status
/// - `400 Bad Request` - Missing title or content
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateWorkDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let work = WorkService::new(&state.db)
        .create(CreateWorkParam::from_dto(caller.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Work submitted", work.into_dto())),
    ))
}

pub async fn update_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateWorkDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let work = WorkService::new(&state.db)
        .update(caller.id, id, UpdateWorkParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Work updated", work.into_dto())),
    ))
}

pub async fn delete_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    WorkService::new(&state.db).delete(caller.id, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Work deleted"))))
}

pub async fn like_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let likes = WorkService::new(&state.db).like(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(LikesDto { likes }))))
}

pub async fn unlike_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let likes = WorkService::new(&state.db).unlike(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(LikesDto { likes }))))
}

/// Lists works awaiting review, oldest first.
///
/// # Access Control
/// - `Reviewer` - admin, super_admin or reviewer
pub async fn list_pending_works(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Reviewer])?;

    let page = WorkService::new(&state.db)
        .list_pending(WorkListParam::from_query(&query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Work::into_dto))))
}

/// Approves or rejects a work.
///
/// # Returns
/// - `200 OK` - Reviewed work with reviewer and timestamp set
/// - `400 Bad Request` - Unknown action
/// - `404 Not Found` - No work with the given id
pub async fn review_work(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ReviewWorkDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Reviewer])?;

    let work = WorkService::new(&state.db)
        .review(caller.id, id, WorkReview::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Work reviewed", work.into_dto())),
    ))
}
