//! Articles, events and albums. Public reads plus editor CRUD under `/admin`.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ListQueryDto},
        content::{
            CreateAlbumDto, CreateArticleDto, CreateEventDto, UpdateAlbumDto, UpdateArticleDto,
            UpdateEventDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ValidatedJson,
        },
        model::content::{
            Album, Article, ArticleKey, ArticleListParam, CreateAlbumParam, CreateArticleParam,
            CreateEventParam, Event, EventListParam, UpdateAlbumParam, UpdateArticleParam,
            UpdateEventParam,
        },
        service::content::{AlbumService, ArticleService, EventService},
        state::AppState,
        util::{pagination::PageParams, parse::search_term},
    },
};

/// Lists published articles, newest first.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = ArticleService::new(&state.db)
        .list_published(PageParams::new(query.page, query.per_page))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Article::into_dto))))
}

/// Gets a published article by numeric id or slug.
///
/// # Returns
/// - `200 OK` - The article
/// - `404 Not Found` - Unknown key, or the article is still a draft
pub async fn get_article(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db)
        .get_published(ArticleKey::parse(&key))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(article.into_dto()))))
}

pub async fn admin_list_articles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let param = ArticleListParam::from_query(&query)?;
    let page = ArticleService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Article::into_dto))))
}

pub async fn admin_get_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let article = ArticleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(article.into_dto()))))
}

/// Creates an article authored by the caller.
///
/// # Access Control
/// - `Editor` - admin, super_admin or editor
///
/// # Returns
/// - `201 Created` - New article, `draft` unless a status was given
/// - `400 Bad Request` - Validation failed or the explicit slug is taken
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let article = ArticleService::new(&state.db)
        .create(CreateArticleParam::from_dto(caller.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Article created", article.into_dto())),
    ))
}

pub async fn update_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let article = ArticleService::new(&state.db)
        .update(id, UpdateArticleParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Article updated", article.into_dto())),
    ))
}

pub async fn delete_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    ArticleService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Article deleted"))))
}

/// Lists events. The admin list shares the same filters behind the editor guard.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = EventListParam::from_query(&query)?;
    let page = EventService::new(&state.db).list(&param).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Event::into_dto))))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(event.into_dto()))))
}

pub async fn admin_list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    list_events(State(state), query).await
}

pub async fn admin_get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    get_event(State(state), id).await
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let event = EventService::new(&state.db)
        .create(CreateEventParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Event created", event.into_dto())),
    ))
}

pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let event = EventService::new(&state.db)
        .update(id, UpdateEventParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Event updated", event.into_dto())),
    ))
}

pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    EventService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Event deleted"))))
}

pub async fn list_albums(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let search = search_term(query.search.as_deref());
    let page = AlbumService::new(&state.db)
        .list(
            PageParams::new(query.page, query.per_page),
            search.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Album::into_dto))))
}

pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let album = AlbumService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(album.into_dto()))))
}

pub async fn admin_list_albums(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    list_albums(State(state), query).await
}

pub async fn admin_get_album(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    get_album(State(state), id).await
}

pub async fn create_album(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let album = AlbumService::new(&state.db)
        .create(CreateAlbumParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Album created", album.into_dto())),
    ))
}

pub async fn update_album(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    let album = AlbumService::new(&state.db)
        .update(id, UpdateAlbumParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Album updated", album.into_dto())),
    ))
}

pub async fn delete_album(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[Permission::Editor])?;

    AlbumService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Album deleted"))))
}
