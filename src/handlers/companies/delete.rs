// handlers/companies/delete.rs - DELETE /api/companies/:id handler

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::server::AppState;

/// DELETE /api/companies/:id - remove a company by id.
///
/// Deleting an unknown id is a store-level not-found, collapsed into the
/// generic failure like everything else.
pub async fn company_delete(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    store.delete(&id).await.map_err(|e| {
        tracing::error!("company delete failed for {}: {}", id, e);
        ApiError::internal_server_error("Failed to delete company")
    })?;

    Ok(Json(json!({ "success": true })))
}
