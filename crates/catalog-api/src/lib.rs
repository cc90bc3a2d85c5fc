//! # catalog-api
//!
//! HTTP API layer for the service catalog built on Axum.
//!
//! Provides the listing endpoints, query-parameter validation, middleware
//! (CORS, logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
