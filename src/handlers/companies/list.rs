// handlers/companies/list.rs - GET /api/companies handler

use axum::{extract::State, Json};

use crate::database::models::Company;
use crate::error::ApiError;
use crate::server::AppState;

/// GET /api/companies - all companies, newest first
pub async fn company_list(State(store): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = store.list().await.map_err(|e| {
        tracing::error!("company list failed: {}", e);
        ApiError::internal_server_error("Failed to fetch companies")
    })?;

    Ok(Json(companies))
}
