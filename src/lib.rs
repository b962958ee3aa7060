//! # HRMS API Library
//!
//! Exposes the Axum router and modules so integration tests can create
//! an in-process server without requiring `cargo run` in another terminal.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::db::AppDb;

/// Build the Axum router with all route modules and middleware.
///
/// The caller is responsible for providing a connected store.
/// This function does NOT start a server.
pub fn create_app(store: AppDb) -> Router {
    Router::new()
        .merge(routes::employees::router())
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}
