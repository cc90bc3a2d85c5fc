//! Capability traits implemented by the database layer.

pub mod store;

pub use store::{ServiceReader, VersionReader};
