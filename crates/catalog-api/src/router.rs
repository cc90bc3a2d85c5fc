//! Route definitions for the catalog HTTP API.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(service_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Service catalog read endpoints
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(handlers::service::list_services))
        .route("/services/{id}", get(handlers::service::get_service))
        .route(
            "/services/{id}/versions",
            get(handlers::service::list_versions),
        )
}

/// Health check endpoint (no database access)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
