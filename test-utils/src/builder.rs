use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Work};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Work)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a custom index, for constraints the entity derive cannot express.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables required for activity registration.
    ///
    /// Adds User, Activity and ActivityParticipant along with the unique
    /// `(activity_id, user_id)` index the migration creates.
    pub fn with_activity_tables(self) -> Self {
        self.with_table(User)
            .with_table(Activity)
            .with_table(ActivityParticipant)
            .with_index(
                Index::create()
                    .name("idx_activity_participants_activity_user")
                    .table(ActivityParticipant)
                    .col(entity::activity_participant::Column::ActivityId)
                    .col(entity::activity_participant::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the tables required for works and their comments.
    pub fn with_work_tables(self) -> Self {
        self.with_table(User).with_table(Work).with_table(Comment)
    }

    /// Adds every table in the schema, used by router-level tests.
    pub fn with_all_tables(self) -> Self {
        self.with_activity_tables()
            .with_table(Work)
            .with_table(Comment)
            .with_table(Article)
            .with_table(Event)
            .with_table(Album)
            .with_table(Carousel)
            .with_table(Announcement)
            .with_table(SystemSetting)
            .with_table(Material)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by the CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
