use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ApiResponse,
        auth::{
            AccessTokenDto, LoginDto, MeDto, RefreshDto, RegisterDto, RegisteredUserDto,
            TokenPairDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ValidatedJson},
        model::user::RegisterParam,
        service::{auth::AuthService, token::TOKEN_TYPE_BEARER},
        state::AppState,
    },
};

/// Registers a new member account.
///
/// The email is trimmed and lowercased before the uniqueness check.
///
/// # Returns
/// - `201 Created` - `{id, email, name}` of the new account
/// - `400 Bad Request` - Validation failed or email already exists
/// - `500 Internal Server Error` - Database or hashing error
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let user = service.register(RegisterParam::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Registered",
            RegisteredUserDto {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        )),
    ))
}

/// Exchanges credentials for an access/refresh token pair.
///
/// # Returns
/// - `200 OK` - Token pair with `token_type: "Bearer"`
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account is banned
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let (_, tokens) = service.login(&payload.email, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(TokenPairDto {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: tokens.expires_in,
        })),
    ))
}

/// Mints a new access token from a refresh token.
///
/// # Returns
/// - `200 OK` - New access token
/// - `401 Unauthorized` - Token invalid, expired or not a refresh token
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let access_token = service.refresh(&payload.refresh_token)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(AccessTokenDto {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: state.tokens.access_ttl_secs(),
        })),
    ))
}

/// Returns the caller's id and role straight from the access token.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MeDto {
            uid: user.id,
            role: user.role,
        })),
    ))
}
