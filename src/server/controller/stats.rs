//! Read-only statistics. The summary is public, everything else needs `Admin`.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::ApiResponse,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

pub async fn public_summary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = StatsService::new(&state.db).public_summary().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(summary))))
}

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let dashboard = StatsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(dashboard))))
}

pub async fn user_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let stats = StatsService::new(&state.db).user_stats().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats))))
}

pub async fn work_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let stats = StatsService::new(&state.db).work_stats().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats))))
}

pub async fn activity_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let stats = StatsService::new(&state.db).activity_stats().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats))))
}

/// This month against last month for users, works, activities and comments.
pub async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let overview = StatsService::new(&state.db).overview().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(overview))))
}

/// New users per month over the last six months, oldest first.
pub async fn user_growth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let points = StatsService::new(&state.db).user_growth().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(points))))
}

pub async fn content_trend(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let trend = StatsService::new(&state.db).content_trend().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(trend))))
}

pub async fn participation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let participation = StatsService::new(&state.db).participation().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(participation))))
}

pub async fn monthly(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let months = StatsService::new(&state.db).monthly().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(months))))
}
