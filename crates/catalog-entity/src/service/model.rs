//! Service entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalogued service: a named external API or system description.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    /// Unique service identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Description of what the service does.
    pub description: String,
    /// Base URL of the service.
    pub url: String,
    /// Reserved reference to an owning organization. Never queried.
    pub organization: Option<String>,
    /// Who registered the service.
    pub author: Option<String>,
    /// Publication status, defaults to `published`.
    pub status: String,
    /// When the service was created.
    pub created_at: DateTime<Utc>,
    /// When the service was last updated.
    pub updated_at: DateTime<Utc>,
    /// Number of versions currently attached. Computed by the store
    /// (aggregate join), never persisted.
    pub version_count: i64,
}

/// Data required to register a new service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateService {
    /// Human-readable name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Base URL.
    pub url: String,
    /// Owning organization (reserved).
    pub organization: Option<String>,
    /// Who registered the service.
    pub author: Option<String>,
}
