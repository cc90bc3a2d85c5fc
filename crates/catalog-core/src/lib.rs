//! # catalog-core
//!
//! Core crate for the service catalog. Contains configuration schemas,
//! pagination and response types, the store capability traits, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
