use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::PingDto, server::state::AppState};

/// Liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe; 503 while the database is unreachable.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!("Readiness check failed: {}", err);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn ping() -> impl IntoResponse {
    Json(PingDto {
        message: "pong".to_string(),
    })
}
