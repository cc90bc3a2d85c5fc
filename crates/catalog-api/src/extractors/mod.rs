//! Custom Axum extractors.

pub mod pagination;
pub mod path;

pub use pagination::{ListQuery, PageQuery};
