use axum::http::{header, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::Role;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::{TokenKind, TokenService},
};


fn tokens() -> TokenService {
    TokenService::new("guard-secret", 7200, 604800)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn access_headers(tokens: &TokenService, user_id: i32, role: Role) -> HeaderMap {
    let token = tokens.issue(user_id, role, TokenKind::Access).unwrap();
    bearer(&token)
}
