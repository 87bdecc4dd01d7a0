use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use super::{ApiError, AppState};

/// Fetch a stored analysis. Malformed and unknown ids both read as absent.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found())?;
    let item = state.store.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(json!({
        "analysis_id": item.id,
        "lead": item.lead,
        "analysis": item.analysis,
        "expires_at": item.expires_at.to_rfc3339(),
    })))
}

/// Delete a stored analysis. Idempotent: unknown ids still succeed.
pub async fn delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    if let Ok(id) = Uuid::parse_str(&id) {
        state.store.delete(id);
    }
    Json(json!({ "success": true }))
}
