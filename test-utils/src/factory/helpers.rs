//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails,
/// slugs and names across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a pending work authored by them.
///
/// # Returns
/// - `Ok((author, work))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_work_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::work::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let work = crate::factory::work::create_work(db, author.id).await?;

    Ok((author, work))
}
