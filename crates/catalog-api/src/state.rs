//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_service::CatalogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Catalog listing service
    pub catalog: Arc<CatalogService>,
}
