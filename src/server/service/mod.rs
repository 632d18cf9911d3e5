//! Business logic layer.
//!
//! Services orchestrate repositories, enforce ownership and state rules, and
//! return domain models. Controllers never call repositories directly.

pub mod account;
pub mod activity;
pub mod announcement;
pub mod auth;
pub mod carousel;
pub mod comment;
pub mod content;
pub mod material;
pub mod password;
pub mod setting;
pub mod stats;
pub mod token;
pub mod upload;
pub mod user;
pub mod work;
