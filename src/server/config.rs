use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_API_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 2 * 60 * 60;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 168 * 60 * 60;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_MAX_MATERIAL_BYTES: usize = 4 * 1024 * 1024;

/// Credentials for the super admin created on first start.
#[derive(Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub api_addr: String,

    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,

    pub db_max_connections: u32,
    pub upload_dir: PathBuf,
    pub max_material_bytes: usize,
    pub bcrypt_cost: u32,

    pub seed_admin: Option<SeedAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let seed_admin = match (
            std::env::var("SEED_ADMIN_EMAIL").ok(),
            std::env::var("SEED_ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) => Some(SeedAdmin { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            api_addr: std::env::var("API_ADDR").unwrap_or_else(|_| DEFAULT_API_ADDR.to_string()),
            access_token_ttl_secs: parsed("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TOKEN_TTL_SECS)?,
            refresh_token_ttl_secs: parsed(
                "REFRESH_TOKEN_TTL_SECS",
                DEFAULT_REFRESH_TOKEN_TTL_SECS,
            )?,
            db_max_connections: parsed("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            upload_dir: PathBuf::from(
                std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_material_bytes: parsed("MAX_MATERIAL_BYTES", DEFAULT_MAX_MATERIAL_BYTES)?,
            bcrypt_cost: parsed("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            seed_admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
