use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::server::{
    controller::{
        account, activity, auth, comment, content, health, material, profile, setting, site,
        stats, user, work,
    },
    service::upload::MAX_AVATAR_BYTES,
    state::AppState,
};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Builds the complete application: API routes, probes, uploaded files and layers.
pub fn app(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.upload_dir);
    let max_material_bytes = state.max_material_bytes;

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .nest("/api/v1", router(max_material_bytes))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Routes mounted under `/api/v1`.
///
/// Upload routes raise axum's default body limit to fit their file caps.
pub fn router(max_material_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .merge(public_routes())
        .merge(member_routes())
        .nest("/admin", admin_routes(max_material_bytes))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/me", get(auth::me))
        .route("/articles", get(content::list_articles))
        .route("/articles/{key}", get(content::get_article))
        .route("/events", get(content::list_events))
        .route("/events/{id}", get(content::get_event))
        .route("/albums", get(content::list_albums))
        .route("/albums/{id}", get(content::get_album))
        .route("/carousels", get(site::list_active_carousels))
        .route("/announcements", get(site::list_published_announcements))
        .route("/stats/summary", get(stats::public_summary))
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/profile/works", get(profile::list_my_works))
        .route("/profile/activities", get(profile::list_my_activities))
        .route(
            "/profile/avatar",
            post(profile::upload_avatar)
                .layer(DefaultBodyLimit::max(MAX_AVATAR_BYTES + MULTIPART_OVERHEAD)),
        )
        .route("/works", get(work::list_works).post(work::create_work))
        .route(
            "/works/{id}",
            get(work::get_work)
                .put(work::update_work)
                .delete(work::delete_work),
        )
        .route(
            "/works/{id}/like",
            post(work::like_work).delete(work::unlike_work),
        )
        .route(
            "/works/{id}/comments",
            get(comment::list_work_comments).post(comment::create_comment),
        )
        .route(
            "/comments/{id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route("/comments/{id}/like", post(comment::like_comment))
        .route("/activities", get(activity::list_activities))
        .route("/activities/{id}", get(activity::get_activity))
        .route(
            "/activities/{id}/register",
            post(activity::register).delete(activity::unregister),
        )
}

fn admin_routes(max_material_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/status", put(user::update_user_status))
        .route(
            "/accounts",
            get(account::list_accounts).post(account::create_account),
        )
        .route(
            "/accounts/{id}",
            put(account::update_account).delete(account::delete_account),
        )
        .route(
            "/activities",
            get(activity::admin_list_activities).post(activity::create_activity),
        )
        .route(
            "/activities/{id}",
            get(activity::admin_get_activity)
                .put(activity::update_activity)
                .delete(activity::delete_activity),
        )
        .route(
            "/activities/{id}/status",
            put(activity::update_activity_status),
        )
        .route(
            "/activities/{id}/participants",
            get(activity::list_participants),
        )
        .route("/works/pending", get(work::list_pending_works))
        .route("/works/{id}/review", put(work::review_work))
        .route("/comments", get(comment::list_review_comments))
        .route("/comments/{id}/review", put(comment::review_comment))
        .route(
            "/articles",
            get(content::admin_list_articles).post(content::create_article),
        )
        .route(
            "/articles/{id}",
            get(content::admin_get_article)
                .put(content::update_article)
                .delete(content::delete_article),
        )
        .route(
            "/events",
            get(content::admin_list_events).post(content::create_event),
        )
        .route(
            "/events/{id}",
            get(content::admin_get_event)
                .put(content::update_event)
                .delete(content::delete_event),
        )
        .route(
            "/albums",
            get(content::admin_list_albums).post(content::create_album),
        )
        .route(
            "/albums/{id}",
            get(content::admin_get_album)
                .put(content::update_album)
                .delete(content::delete_album),
        )
        .route(
            "/carousels",
            get(site::list_carousels).post(site::create_carousel),
        )
        .route(
            "/carousels/{id}",
            put(site::update_carousel).delete(site::delete_carousel),
        )
        .route("/carousels/{id}/order", put(site::update_carousel_order))
        .route(
            "/announcements",
            get(site::list_announcements).post(site::create_announcement),
        )
        .route(
            "/announcements/{id}",
            put(site::update_announcement).delete(site::delete_announcement),
        )
        .route(
            "/announcements/{id}/publish",
            put(site::publish_announcement),
        )
        .route(
            "/settings",
            get(setting::get_settings).put(setting::update_settings),
        )
        .route(
            "/settings/{key}",
            get(setting::get_setting).put(setting::update_setting),
        )
        .route(
            "/materials",
            get(material::list_materials).post(material::create_material),
        )
        .route(
            "/materials/upload",
            post(material::upload_material)
                .layer(DefaultBodyLimit::max(max_material_bytes + MULTIPART_OVERHEAD)),
        )
        .route(
            "/materials/{id}",
            get(material::get_material)
                .put(material::update_material)
                .delete(material::delete_material),
        )
        .route("/stats/dashboard", get(stats::dashboard))
        .route("/stats/users", get(stats::user_stats))
        .route("/stats/works", get(stats::work_stats))
        .route("/stats/activities", get(stats::activity_stats))
        .route("/stats/overview", get(stats::overview))
        .route("/stats/user-growth", get(stats::user_growth))
        .route("/stats/content-trend", get(stats::content_trend))
        .route("/stats/participation", get(stats::participation))
        .route("/stats/monthly", get(stats::monthly))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use entity::sea_orm_active_enums::Role;
    use serde_json::{json, Value};
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::server::service::token::{TokenKind, TokenService};

    async fn test_app() -> (AppState, Router) {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let state = AppState::new(
            db,
            TokenService::new("router-secret", 7200, 604800),
            std::env::temp_dir().join("maimang-router-test"),
            4 * 1024 * 1024,
            4,
        );

        (state.clone(), app(state))
    }

    fn bearer(state: &AppState, user_id: i32, role: Role) -> String {
        let token = state.tokens.issue(user_id, role, TokenKind::Access).unwrap();
        format!("Bearer {}", token)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(
        uri: &str,
        authorization: String,
        field: &str,
        content_type: &str,
        len: usize,
    ) -> Request<Body> {
        let boundary = "maimang-boundary";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload.bin\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend(vec![0u8; len]);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header(header::AUTHORIZATION, authorization)
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests the ping endpoint answers without authentication.
    ///
    /// Expected: 200 with `{"message": "pong"}`
    #[tokio::test]
    async fn ping_returns_pong() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/api/v1/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "pong");
    }

    /// Tests the readiness probe pings the database.
    ///
    /// Expected: 200 while the in-memory database is up
    #[tokio::test]
    async fn readyz_reports_ready() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests protected routes reject requests without a token.
    ///
    /// Expected: 401 with the failure envelope
    #[tokio::test]
    async fn profile_requires_token() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/api/v1/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }

    /// Tests a member cannot reach the admin user list.
    ///
    /// Expected: 403
    #[tokio::test]
    async fn admin_routes_reject_members() {
        let (state, app) = test_app().await;

        let response = app
            .oneshot(
                Request::get("/api/v1/admin/users")
                    .header(header::AUTHORIZATION, bearer(&state, 1, Role::Member))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    /// Tests settings writes need a super admin even for other staff roles.
    ///
    /// Expected: 403 for an admin token
    #[tokio::test]
    async fn settings_write_requires_super_admin() {
        let (state, app) = test_app().await;

        let mut request = json_request(
            "PUT",
            "/api/v1/admin/settings",
            json!({ "settings": { "site_name": "Maimang" } }),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            bearer(&state, 1, Role::Admin).parse().unwrap(),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    /// Tests a new member can register, log in and read their identity.
    ///
    /// Expected: 201 on register, 200 with a bearer token pair on login, and
    /// `/me` echoing the member role
    #[tokio::test]
    async fn register_login_and_me() {
        let (_, app) = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                json!({
                    "name": "Lin",
                    "email": "Lin@Example.com",
                    "password": "password123"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let registered = body_json(response).await;
        assert_eq!(registered["data"]["email"], "lin@example.com");

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                json!({ "email": "lin@example.com", "password": "password123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login = body_json(response).await;
        assert_eq!(login["data"]["token_type"], "Bearer");
        let access_token = login["data"]["access_token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::get("/api/v1/me")
                    .header(header::AUTHORIZATION, format!("Bearer {}", access_token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let me = body_json(response).await;
        assert_eq!(me["data"]["role"], "member");
        assert_eq!(me["data"]["uid"], registered["data"]["id"]);
    }

    /// Tests a wrong password is rejected.
    ///
    /// Expected: 401
    #[tokio::test]
    async fn login_rejects_unknown_credentials() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                json!({ "email": "nobody@example.com", "password": "password123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests the public work list is reachable anonymously and starts empty.
    ///
    /// Expected: 200 with an empty page and `total` 0
    #[tokio::test]
    async fn public_work_list_is_open() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/api/v1/works").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["meta"]["total"], 0);
        assert_eq!(body["data"], json!([]));
    }

    /// Tests an unknown sort field is refused rather than passed to SQL.
    ///
    /// Expected: 400
    #[tokio::test]
    async fn rejects_unknown_sort_field() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(
                Request::get("/api/v1/works?sort_by=password_hash")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests a page number far past the data is capped instead of overflowing
    /// the row offset.
    ///
    /// Expected: 200 with an empty page and `meta.page` at the offset cap
    #[tokio::test]
    async fn caps_huge_page_numbers() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(
                Request::get("/api/v1/works?page=18446744073709551615")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["meta"]["page"], json!(i64::MAX as u64 / 20));
        assert_eq!(body["data"], json!([]));
    }

    /// Tests an avatar at exactly the size cap passes the body limit.
    ///
    /// Expected: 200 with an avatar URL under `/uploads/avatars/`
    #[tokio::test]
    async fn accepts_avatar_at_size_cap() {
        let (state, app) = test_app().await;
        let user = test_utils::factory::create_user(&state.db).await.unwrap();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/profile/avatar",
                bearer(&state, user.id, Role::Member),
                "avatar",
                "image/png",
                MAX_AVATAR_BYTES,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let url = body["data"]["avatar_url"].as_str().unwrap();
        assert!(url.starts_with("/uploads/avatars/"));
    }

    /// Tests an avatar well past the cap is stopped by the body limit.
    ///
    /// Expected: 413
    #[tokio::test]
    async fn rejects_oversized_avatar_body() {
        let (state, app) = test_app().await;
        let user = test_utils::factory::create_user(&state.db).await.unwrap();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/profile/avatar",
                bearer(&state, user.id, Role::Member),
                "avatar",
                "image/png",
                3 * 1024 * 1024,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    /// Tests material uploads follow the configured limit rather than axum's
    /// 2 MB default.
    ///
    /// Expected: 201 for a 3 MiB file under the 4 MiB limit
    #[tokio::test]
    async fn accepts_material_under_configured_limit() {
        let (state, app) = test_app().await;
        let editor = test_utils::factory::create_user(&state.db).await.unwrap();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/admin/materials/upload",
                bearer(&state, editor.id, Role::Editor),
                "file",
                "application/pdf",
                3 * 1024 * 1024,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["size"], 3 * 1024 * 1024);
    }

    /// Tests the admin event and album routes are guarded for editors.
    ///
    /// Expected: 403 for a member on both lists, 200 for an editor, and 404 for
    /// an editor reading a missing event
    #[tokio::test]
    async fn admin_events_and_albums_require_editor() {
        let (state, app) = test_app().await;
        let member = bearer(&state, 1, Role::Member);
        let editor = bearer(&state, 1, Role::Editor);

        for uri in ["/api/v1/admin/events", "/api/v1/admin/albums"] {
            let response = app
                .clone()
                .oneshot(
                    Request::get(uri)
                        .header(header::AUTHORIZATION, member.clone())
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let response = app
                .clone()
                .oneshot(
                    Request::get(uri)
                        .header(header::AUTHORIZATION, editor.clone())
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::get("/api/v1/admin/events/999")
                    .header(header::AUTHORIZATION, editor)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
