//! The catalog listing service.

use std::sync::Arc;

use uuid::Uuid;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::{ServiceReader, VersionReader};
use catalog_core::types::pagination::PageRequest;
use catalog_entity::service::{Service, ServiceVersion};

/// Executes listing queries against the store capabilities.
///
/// Holds trait objects rather than concrete repositories so that the
/// store can be swapped for an in-memory fake in tests.
#[derive(Clone)]
pub struct CatalogService {
    /// Service collection reader.
    services: Arc<dyn ServiceReader<Service>>,
    /// Version collection reader.
    versions: Arc<dyn VersionReader<ServiceVersion>>,
}

impl CatalogService {
    /// Create a new catalog service over the given stores.
    pub fn new(
        services: Arc<dyn ServiceReader<Service>>,
        versions: Arc<dyn VersionReader<ServiceVersion>>,
    ) -> Self {
        Self { services, versions }
    }

    /// List one page of services plus the total matching count.
    ///
    /// `search` filters case-insensitively on name OR description; the
    /// total ignores the pagination window.
    pub async fn list_services(
        &self,
        page: &PageRequest,
        search: Option<&str>,
    ) -> AppResult<(Vec<Service>, u64)> {
        self.services.find_page(page, search).await
    }

    /// Fetch a single service. An unknown id is `None`, not an error;
    /// the HTTP layer decides how to report absence.
    pub async fn get_service(&self, id: Uuid) -> AppResult<Option<Service>> {
        self.services.find_by_id(id).await
    }

    /// List one page of a service's versions, newest version string first.
    ///
    /// Fails with `NotFound` before touching the versions store when the
    /// parent service does not exist.
    pub async fn list_versions(
        &self,
        service_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<(Vec<ServiceVersion>, u64)> {
        if self.services.find_by_id(service_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Service with ID {service_id} not found"
            )));
        }

        self.versions.find_page_for_service(service_id, page).await
    }
}
