//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use folderview_auth::jwt::JwtDecoder;
use folderview_core::config::AppConfig;
use folderview_database::DatabasePool;
use folderview_service::view::ViewService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool; `None` leaves the database out of the health check
    pub db_pool: Option<DatabasePool>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Folder view service
    pub view_service: Arc<ViewService>,
}
