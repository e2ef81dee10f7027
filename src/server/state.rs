//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` shares its
//! pool between clones and `JwtService` only holds key material.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::JwtService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies the bearer tokens of incoming requests.
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}
