//! Home page carousel and announcements.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        site::{
            CreateAnnouncementDto, CreateCarouselDto, UpdateAnnouncementDto, UpdateCarouselDto,
            UpdateCarouselOrderDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::site::{
            Announcement, AnnouncementListParam, Carousel, CarouselListParam,
            CreateAnnouncementParam, CreateCarouselParam, UpdateAnnouncementParam,
            UpdateCarouselParam,
        },
        service::{announcement::AnnouncementService, carousel::CarouselService},
        state::AppState,
        util::pagination::PageParams,
    },
};

/// Active carousel slides in display order.
pub async fn list_active_carousels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let slides = CarouselService::new(&state.db).list_active().await?;
    let slides: Vec<_> = slides.into_iter().map(Carousel::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(slides))))
}

pub async fn list_carousels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let param = CarouselListParam::from_query(&query)?;
    let page = CarouselService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Carousel::into_dto))))
}

pub async fn create_carousel(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateCarouselDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let slide = CarouselService::new(&state.db)
        .create(CreateCarouselParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Carousel created", slide.into_dto())),
    ))
}

pub async fn update_carousel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCarouselDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let slide = CarouselService::new(&state.db)
        .update(id, UpdateCarouselParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Carousel updated", slide.into_dto())),
    ))
}

/// Moves a slide to a new display position.
pub async fn update_carousel_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCarouselOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let slide = CarouselService::new(&state.db)
        .update_order(id, payload.order)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Order updated", slide.into_dto())),
    ))
}

pub async fn delete_carousel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    CarouselService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Carousel deleted"))))
}

/// Published announcements, most recently published first.
pub async fn list_published_announcements(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = AnnouncementService::new(&state.db)
        .list_published(PageParams::new(query.page, query.per_page))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Announcement::into_dto))))
}

pub async fn list_announcements(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let param = AnnouncementListParam::from_query(&query)?;
    let page = AnnouncementService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Announcement::into_dto))))
}

pub async fn create_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let announcement = AnnouncementService::new(&state.db)
        .create(CreateAnnouncementParam::from_dto(caller.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Announcement created",
            announcement.into_dto(),
        )),
    ))
}

pub async fn update_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let announcement = AnnouncementService::new(&state.db)
        .update(id, UpdateAnnouncementParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Announcement updated",
            announcement.into_dto(),
        )),
    ))
}

/// Publishes an announcement and stamps `published_at`.
pub async fn publish_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let announcement = AnnouncementService::new(&state.db).publish(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Announcement published",
            announcement.into_dto(),
        )),
    ))
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    AnnouncementService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Announcement deleted"))))
}
