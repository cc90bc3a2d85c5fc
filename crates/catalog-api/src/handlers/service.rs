//! Service and version listing handlers.

use axum::Json;
use axum::extract::{Path, State};

use catalog_core::error::AppError;
use catalog_core::types::pagination::PageMeta;

use crate::dto::{ItemResponse, ListResponse, ServiceResponse, VersionResponse};
use crate::extractors::path::parse_uuid;
use crate::extractors::{ListQuery, PageQuery};
use crate::state::AppState;

fn service_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Service with ID {id} not found"))
}

/// GET /services
pub async fn list_services(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<ListResponse<ServiceResponse>>, AppError> {
    let (rows, total) = state
        .catalog
        .list_services(&query.page, query.search.as_deref())
        .await?;

    Ok(Json(ListResponse {
        data: rows.into_iter().map(ServiceResponse::from).collect(),
        meta: PageMeta::new(total, &query.page),
    }))
}

/// GET /services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<ServiceResponse>>, AppError> {
    // A malformed id cannot match any row, so it reads as absent.
    let service_id = parse_uuid(&id).ok_or_else(|| service_not_found(&id))?;

    match state.catalog.get_service(service_id).await? {
        Some(service) => Ok(Json(ItemResponse::new(ServiceResponse::from(service)))),
        None => Err(service_not_found(&id)),
    }
}

/// GET /services/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: PageQuery,
) -> Result<Json<ListResponse<VersionResponse>>, AppError> {
    let service_id = parse_uuid(&id).ok_or_else(|| service_not_found(&id))?;

    let (rows, total) = state.catalog.list_versions(service_id, &query.page).await?;

    Ok(Json(ListResponse {
        data: rows.into_iter().map(VersionResponse::from).collect(),
        meta: PageMeta::new(total, &query.page),
    }))
}
