//! Service repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::ServiceReader;
use catalog_core::types::pagination::PageRequest;
use catalog_entity::service::{CreateService, Service};

/// Repository for service listing, lookup, and seeding inserts.
///
/// Every select joins the versions table so that `version_count` comes
/// back with the row, without a second round trip.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    /// Create a new service repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new service. Used by seeding only; the API is read-only.
    pub async fn insert(&self, create: &CreateService) -> AppResult<Service> {
        sqlx::query_as::<_, Service>(
            "INSERT INTO services (id, name, description, url, organization, author) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, description, url, organization, author, status, \
                       created_at, updated_at, 0::BIGINT AS version_count",
        )
        .bind(Uuid::new_v4())
        .bind(&create.name)
        .bind(&create.description)
        .bind(&create.url)
        .bind(&create.organization)
        .bind(&create.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert service", e))
    }
}

#[async_trait]
impl ServiceReader<Service> for ServiceRepository {
    async fn find_page(
        &self,
        page: &PageRequest,
        search: Option<&str>,
    ) -> AppResult<(Vec<Service>, u64)> {
        match search {
            Some(term) => {
                let pattern = format!("%{term}%");

                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM services WHERE name ILIKE $1 OR description ILIKE $1",
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count services", e)
                })?;

                let services = sqlx::query_as::<_, Service>(
                    "SELECT s.id, s.name, s.description, s.url, s.organization, s.author, \
                            s.status, s.created_at, s.updated_at, \
                            COUNT(v.id) AS version_count \
                     FROM services s \
                     LEFT JOIN service_versions v ON v.service_id = s.id \
                     WHERE s.name ILIKE $1 OR s.description ILIKE $1 \
                     GROUP BY s.id \
                     ORDER BY s.created_at, s.id \
                     LIMIT $2 OFFSET $3",
                )
                .bind(&pattern)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list services", e)
                })?;

                Ok((services, total as u64))
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count services", e)
                    })?;

                let services = sqlx::query_as::<_, Service>(
                    "SELECT s.id, s.name, s.description, s.url, s.organization, s.author, \
                            s.status, s.created_at, s.updated_at, \
                            COUNT(v.id) AS version_count \
                     FROM services s \
                     LEFT JOIN service_versions v ON v.service_id = s.id \
                     GROUP BY s.id \
                     ORDER BY s.created_at, s.id \
                     LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list services", e)
                })?;

                Ok((services, total as u64))
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>> {
        sqlx::query_as::<_, Service>(
            "SELECT s.id, s.name, s.description, s.url, s.organization, s.author, \
                    s.status, s.created_at, s.updated_at, \
                    COUNT(v.id) AS version_count \
             FROM services s \
             LEFT JOIN service_versions v ON v.service_id = s.id \
             WHERE s.id = $1 \
             GROUP BY s.id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find service", e))
    }
}
