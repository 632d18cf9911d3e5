//! HTTP backend for the literary club site.
//!
//! Members publish works, comment on them and sign up for club activities; staff
//! moderate submissions, curate articles, events and albums, manage the home page
//! and read club statistics. Everything is exposed as JSON under `/api/v1`.
//!
//! # Layers
//!
//! - `controller/` - Axum handlers. Each one checks the caller's role with
//!   `AuthGuard`, turns DTOs into params and wraps the result in the response envelope
//! - `service/` - Rules that span repositories: ownership checks, registration
//!   capacity, slug generation, review transitions, file uploads
//! - `data/` - SeaORM repositories returning domain models
//! - `model/` - Domain models and the params services accept
//! - `error/` - `AppError` and its mapping to status codes
//! - `middleware/` - Bearer token guard and validated JSON extractor
//!
//! `config`, `state`, `startup` and `router` wire these together at boot; `util`
//! holds pagination and query parsing shared by the list endpoints.
//!
//! A handler never touches the database directly. It calls a service, which
//! calls one or more repositories, and converts the returned model with `into_dto`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
