//! Catalog listing operations.

pub mod service;

pub use service::CatalogService;
