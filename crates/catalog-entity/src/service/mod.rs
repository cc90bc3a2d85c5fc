//! Service catalog entities.

pub mod model;
pub mod version;

pub use model::{CreateService, Service};
pub use version::{CreateServiceVersion, ServiceVersion};
