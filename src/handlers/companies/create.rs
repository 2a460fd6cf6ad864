// handlers/companies/create.rs - POST /api/companies handler

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

use crate::database::models::{Company, CompanyInput};
use crate::error::ApiError;
use crate::server::AppState;

/// POST /api/companies - create a company from `{name, description}`.
///
/// No server-side presence validation on `name`; the store's own constraints
/// are the only gate. The client form is responsible for requiring a name.
/// Body rejections (malformed JSON, missing fields) collapse into the same
/// generic failure as store errors.
pub async fn company_create(
    State(store): State<AppState>,
    input: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let Json(input) = input.map_err(|e| {
        tracing::error!("company create body rejected: {}", e);
        ApiError::internal_server_error("Failed to create company")
    })?;

    let company = store.create(input).await.map_err(|e| {
        tracing::error!("company create failed: {}", e);
        ApiError::internal_server_error("Failed to create company")
    })?;

    Ok(Json(company))
}
