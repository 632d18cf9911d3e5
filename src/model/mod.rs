//! Wire types shared by every HTTP handler.
//!
//! Request bodies, response payloads, the response envelope and pagination
//! metadata live here. Domain models convert into these at the controller boundary.

pub mod activity;
pub mod api;
pub mod auth;
pub mod comment;
pub mod content;
pub mod material;
pub mod setting;
pub mod site;
pub mod stats;
pub mod user;
pub mod work;
