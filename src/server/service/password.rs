//! bcrypt hashing off the async runtime.

use crate::server::error::AppError;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verify task failed: {}", e)))??;

    Ok(matches)
}
