use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{CreateActivityDto, UpdateActivityDto, UpdateActivityStatusDto},
        api::{ApiResponse, ListQueryDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::activity::{
            Activity, ActivityListParam, CreateActivityParam, Participant, UpdateActivityParam,
        },
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Lists activities with their live participant counts.
///
/// Public; also mounted under `/admin/activities` behind the `Admin` permission.
///
/// # Arguments
/// - `query` - `page`, `per_page`, `search` (title, description, location),
///   `status`, `sort_by` (`date`, `created_at`, `title`) and `sort_dir`
///
/// # Returns
/// - `200 OK` - Paginated activities, soonest first by default
/// - `400 Bad Request` - Unknown status or sort field
pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ActivityListParam::from_query(&query)?;
    let page = ActivityService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Activity::into_dto))))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let activity = ActivityService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(activity.into_dto()))))
}

pub async fn admin_list_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    list_activities(State(state), query).await
}

pub async fn admin_get_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    get_activity(State(state), path).await
}

/// Creates an activity.
///
/// # Access Control
/// - `Editor` - admin, super_admin or editor
///
/// # Returns
/// - `201 Created` - New activity with zero participants
/// - `400 Bad Request` - Missing title, bad date or negative capacity
pub async fn create_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let activity = ActivityService::new(&state.db)
        .create(CreateActivityParam::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Activity created", activity.into_dto())),
    ))
}

pub async fn update_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let activity = ActivityService::new(&state.db)
        .update(id, UpdateActivityParam::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Activity updated", activity.into_dto())),
    ))
}

pub async fn update_activity_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateActivityStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let activity = ActivityService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Status updated", activity.into_dto())),
    ))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    ActivityService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Activity deleted"))))
}

pub async fn list_participants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let participants = ActivityService::new(&state.db).participants(id).await?;
    let participants: Vec<_> = participants.into_iter().map(Participant::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(participants))))
}

/// Registers the caller for an activity.
///
/// # Returns
/// - `201 Created` - Participation record
/// - `400 Bad Request` - Activity not open for registration, full, or already joined
/// - `404 Not Found` - Activity missing or deleted
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let participant = ActivityService::new(&state.db).register(id, caller.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Registered", participant.into_dto())),
    ))
}

pub async fn unregister(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    ActivityService::new(&state.db).unregister(id, caller.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Registration cancelled"))))
}
