//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so
//! the service layer never touches entity types. All queries, inserts, updates
//! and deletes go through these structs.

pub mod activity;
pub mod activity_participant;
pub mod album;
pub mod announcement;
pub mod article;
pub mod carousel;
pub mod comment;
pub mod event;
pub mod material;
pub mod stats;
pub mod system_setting;
pub mod user;
pub mod work;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Returns true when `err` is a unique constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
