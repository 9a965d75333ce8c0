use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::tenant::TenantId;
use crate::models::lead::CreateLeadRequest;
use crate::AppState;

// Write-only for now: there is no list endpoint on this surface yet.
pub async fn create_lead(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
    Json(body): Json<CreateLeadRequest>,
) -> AppResult<Json<Value>> {
    let lead = state.store.create_lead(tenant.0, body).await;
    Ok(Json(json!(lead)))
}
