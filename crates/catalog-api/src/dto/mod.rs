//! Request/response DTOs.

pub mod response;

pub use response::{
    EmptyMeta, HealthResponse, ItemResponse, ListResponse, ServiceResponse, VersionResponse,
};
