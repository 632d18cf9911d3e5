use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        comment::{CreateCommentDto, ReviewCommentDto, UpdateCommentDto},
        work::LikesDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::comment::{Comment, CommentListParam},
        service::comment::CommentService,
        state::AppState,
        util::pagination::PageParams,
    },
};

/// Lists approved comments on a work, newest first.
pub async fn list_work_comments(
    State(state): State<AppState>,
    Path(work_id): Path<i32>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = CommentService::new(&state.db)
        .list_for_work(work_id, PageParams::new(query.page, query.per_page))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Comment::into_dto))))
}

/// Posts a comment on a work. The comment stays pending until reviewed.
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(work_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comment = CommentService::new(&state.db)
        .create(caller.id, work_id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Comment submitted", comment.into_dto())),
    ))
}

pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comment = CommentService::new(&state.db)
        .update(caller.id, id, payload.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Comment updated", comment.into_dto())),
    ))
}

/// Deletes a comment.
///
/// # Access Control
/// - Comment author, or any admin console role
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    CommentService::new(&state.db).delete(caller, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Comment deleted"))))
}

pub async fn like_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let likes = CommentService::new(&state.db).like(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(LikesDto { likes }))))
}

/// Lists comments for moderation.
///
/// # Access Control
/// - `Reviewer` - admin, super_admin or reviewer
///
/// # Arguments
/// - `query` - `status` defaults to `pending`; `search` matches the content
pub async fn list_review_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Reviewer])?;

    let page = CommentService::new(&state.db)
        .list_for_review(CommentListParam::for_review(&query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Comment::into_dto))))
}

/// Applies a moderation action: approve, reject, hide, unhide or pend.
pub async fn review_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ReviewCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Reviewer])?;

    let comment = CommentService::new(&state.db)
        .review(caller.id, id, payload.action)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Comment reviewed", comment.into_dto())),
    ))
}
