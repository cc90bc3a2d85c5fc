//! Service version entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A versioned release belonging to one service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceVersion {
    /// Unique version identifier.
    pub id: Uuid,
    /// The owning service.
    pub service_id: Uuid,
    /// Semantic version string. Ordered as plain text, not semver-aware.
    pub version: String,
    /// Description of this release.
    pub description: String,
    /// URL of this release.
    pub url: String,
    /// Who published the version.
    pub author: Option<String>,
    /// Publication status, defaults to `published`.
    pub status: String,
    /// When the version was created.
    pub created_at: DateTime<Utc>,
    /// When the version was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to publish a new service version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceVersion {
    /// The owning service.
    pub service_id: Uuid,
    /// Semantic version string.
    pub version: String,
    /// Description.
    pub description: String,
    /// URL of this release.
    pub url: String,
    /// Who published the version.
    pub author: Option<String>,
}
