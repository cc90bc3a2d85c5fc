//! Store capability traits for the listing service.
//!
//! The listing service depends only on these traits, never on a concrete
//! database client, so the store can be substituted with an in-memory
//! fake in tests. The traits are generic over the row type so that this
//! crate stays free of entity dependencies.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

/// Paged, searchable read access to the service collection.
#[async_trait]
pub trait ServiceReader<S>: Send + Sync + 'static
where
    S: Send + Sync + 'static,
{
    /// Fetch one page of services plus the total matching-row count.
    ///
    /// `search` matches rows whose name OR description contains the term,
    /// case-insensitively. The total ignores the window.
    async fn find_page(
        &self,
        page: &PageRequest,
        search: Option<&str>,
    ) -> AppResult<(Vec<S>, u64)>;

    /// Fetch a single service by id. Absent is `None`, not an error.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<S>>;
}

/// Paged read access to the versions belonging to one service.
#[async_trait]
pub trait VersionReader<V>: Send + Sync + 'static
where
    V: Send + Sync + 'static,
{
    /// Fetch one page of versions for `service_id`, ordered by version
    /// string descending, plus the total version count for that service.
    async fn find_page_for_service(
        &self,
        service_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<(Vec<V>, u64)>;
}
