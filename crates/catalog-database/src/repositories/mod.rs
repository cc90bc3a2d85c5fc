//! Repository implementations for the catalog entities.

pub mod service;
pub mod version;

pub use service::ServiceRepository;
pub use version::VersionRepository;
