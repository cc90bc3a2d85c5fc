//! Service version repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::VersionReader;
use catalog_core::types::pagination::PageRequest;
use catalog_entity::service::{CreateServiceVersion, ServiceVersion};

/// Repository for version listing and seeding inserts.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: PgPool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new version. Used by seeding only; the API is read-only.
    pub async fn insert(&self, create: &CreateServiceVersion) -> AppResult<ServiceVersion> {
        sqlx::query_as::<_, ServiceVersion>(
            "INSERT INTO service_versions (id, service_id, version, description, url, author) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(create.service_id)
        .bind(&create.version)
        .bind(&create.description)
        .bind(&create.url)
        .bind(&create.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert version", e))
    }

    /// Count all version rows. The seeder uses this to skip re-seeding.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service_versions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count versions", e))?;
        Ok(total as u64)
    }
}

#[async_trait]
impl VersionReader<ServiceVersion> for VersionRepository {
    async fn find_page_for_service(
        &self,
        service_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<(Vec<ServiceVersion>, u64)> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM service_versions WHERE service_id = $1")
                .bind(service_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count versions", e)
                })?;

        let versions = sqlx::query_as::<_, ServiceVersion>(
            "SELECT * FROM service_versions WHERE service_id = $1 \
             ORDER BY version DESC LIMIT $2 OFFSET $3",
        )
        .bind(service_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))?;

        Ok((versions, total as u64))
    }
}
