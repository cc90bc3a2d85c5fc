//! # catalog-service
//!
//! Business logic for the service catalog. The [`catalog::CatalogService`]
//! depends only on the store capability traits from `catalog-core`, so it
//! can run against PostgreSQL repositories in production and in-memory
//! fakes in tests.

pub mod catalog;

pub use catalog::CatalogService;
