//! Pagination and search query parameter extractors.
//!
//! Parameters are read as raw strings and validated explicitly so that a
//! non-integer `page=abc` produces per-rule violation messages instead of a
//! generic deserialization failure.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use catalog_core::types::pagination::PageRequest;

use crate::error::ValidationRejection;

/// Raw query parameters before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawListQuery {
    page: Option<String>,
    limit: Option<String>,
    search: Option<String>,
}

/// Validated query parameters for the services listing.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Validated pagination window.
    pub page: PageRequest,
    /// Optional search term; an empty or blank value counts as absent.
    pub search: Option<String>,
}

/// Validated pagination parameters for endpoints without search.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Validated pagination window.
    pub page: PageRequest,
}

fn raw_query(parts: &Parts) -> Result<RawListQuery, ValidationRejection> {
    let Query(raw): Query<RawListQuery> = Query::try_from_uri(&parts.uri)
        .map_err(|_| ValidationRejection(vec!["query string is malformed".to_string()]))?;
    Ok(raw)
}

fn normalize_search(search: Option<String>) -> Option<String> {
    search.filter(|s| !s.trim().is_empty())
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_query(parts)?;
        let page = PageRequest::from_raw(raw.page.as_deref(), raw.limit.as_deref())
            .map_err(ValidationRejection)?;

        Ok(Self {
            page,
            search: normalize_search(raw.search),
        })
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_query(parts)?;
        let page = PageRequest::from_raw(raw.page.as_deref(), raw.limit.as_deref())
            .map_err(ValidationRejection)?;

        Ok(Self { page })
    }
}
