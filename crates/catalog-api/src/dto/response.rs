//! Response DTOs.
//!
//! Entities are projected down to their public fields here; internal
//! metadata (author, status, timestamps, organization) never leaves the
//! process.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::types::pagination::PageMeta;
use catalog_entity::service::{Service, ServiceVersion};

/// Paginated response wrapper: `{ data: [...], meta: {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T: Serialize> {
    /// Items in this page.
    pub data: Vec<T>,
    /// Pagination metadata for the full matching set.
    pub meta: PageMeta,
}

/// Single-item response wrapper: `{ data: {...}, meta: {} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse<T: Serialize> {
    /// The requested item.
    pub data: T,
    /// Always empty for single items; kept for envelope consistency.
    pub meta: EmptyMeta,
}

/// Empty metadata object, serialized as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyMeta {}

impl<T: Serialize> ItemResponse<T> {
    /// Wraps a single item in the standard envelope.
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: EmptyMeta {},
        }
    }
}

/// Public projection of a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Service ID.
    pub id: Uuid,
    /// Service name.
    pub name: String,
    /// Service description.
    pub description: String,
    /// Base URL of the service.
    pub url: String,
    /// Number of versions currently associated with the service.
    pub version_count: i64,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            url: service.url,
            version_count: service.version_count,
        }
    }
}

/// Public projection of a service version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Version ID.
    pub id: Uuid,
    /// Version string.
    pub version: String,
    /// Release description.
    pub description: String,
    /// URL of this versioned release.
    pub url: String,
}

impl From<ServiceVersion> for VersionResponse {
    fn from(version: ServiceVersion) -> Self {
        Self {
            id: version.id,
            version: version.version,
            description: version.description,
            url: version.url,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
