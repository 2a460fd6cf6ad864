// handlers/companies/update.rs - PUT /api/companies/:id handler

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::{Company, CompanyInput};
use crate::error::ApiError;
use crate::server::AppState;

/// PUT /api/companies/:id - replace name/description of an existing company.
///
/// A missing id surfaces from the store as not-found but is collapsed into
/// the same generic failure as any other store error, and so are body
/// rejections from the JSON extractor.
pub async fn company_update(
    State(store): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let Json(input) = input.map_err(|e| {
        tracing::error!("company update body rejected for {}: {}", id, e);
        ApiError::internal_server_error("Failed to update company")
    })?;

    let company = store.update(&id, input).await.map_err(|e| {
        tracing::error!("company update failed for {}: {}", id, e);
        ApiError::internal_server_error("Failed to update company")
    })?;

    Ok(Json(company))
}
