//! SeaORM entity models for the literary club database.
//!
//! One module per table plus the string-backed enums shared by the models.

pub mod prelude;

pub mod activity;
pub mod activity_participant;
pub mod album;
pub mod announcement;
pub mod article;
pub mod carousel;
pub mod comment;
pub mod event;
pub mod material;
pub mod sea_orm_active_enums;
pub mod system_setting;
pub mod user;
pub mod work;
