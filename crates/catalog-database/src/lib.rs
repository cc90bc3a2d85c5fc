//! # catalog-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the service catalog entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
