//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary;
//! controllers convert them into DTOs from `crate::model`.

pub mod activity;
pub mod comment;
pub mod content;
pub mod material;
pub mod setting;
pub mod site;
pub mod stats;
pub mod user;
pub mod work;
