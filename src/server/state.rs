//! Application state shared across all request handlers.
//!
//! Holds the database pool, the token signer and upload settings. Cloned per
//! request through Axum's state extraction; every field is cheap to clone.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the pool.
    pub db: DatabaseConnection,

    /// Signs and verifies access and refresh tokens.
    pub tokens: TokenService,

    /// Root directory for uploaded avatars and materials, served under `/uploads`.
    pub upload_dir: PathBuf,

    /// Largest material file accepted by the upload route.
    pub max_material_bytes: usize,

    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        upload_dir: PathBuf,
        max_material_bytes: usize,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            tokens,
            upload_dir,
            max_material_bytes,
            bcrypt_cost,
        }
    }

    /// Builds state from the loaded configuration once the database is connected.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            TokenService::new(
                &config.jwt_secret,
                config.access_token_ttl_secs,
                config.refresh_token_ttl_secs,
            ),
            config.upload_dir.clone(),
            config.max_material_bytes,
            config.bcrypt_cost,
        )
    }
}
