//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let activity = factory::activity::create_activity(&db).await?;
//!
//! let (author, work) = factory::helpers::create_work_with_author(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let editor = factory::user::UserFactory::new(&db)
//!     .email("editor@example.com")
//!     .role(Role::Editor)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod activity_participant;
pub mod album;
pub mod announcement;
pub mod article;
pub mod carousel;
pub mod comment;
pub mod event;
pub mod helpers;
pub mod material;
pub mod user;
pub mod work;

// Re-export commonly used factory functions for concise usage
pub use activity::create_activity;
pub use activity_participant::create_participant;
pub use album::create_album;
pub use announcement::create_announcement;
pub use article::create_article;
pub use carousel::create_carousel;
pub use comment::create_comment;
pub use event::create_event;
pub use material::create_material;
pub use user::create_user;
pub use work::create_work;
