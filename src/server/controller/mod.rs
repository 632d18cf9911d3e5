pub mod account;
pub mod activity;
pub mod auth;
pub mod comment;
pub mod content;
pub mod health;
pub mod material;
pub mod profile;
pub mod setting;
pub mod site;
pub mod stats;
pub mod user;
pub mod work;
