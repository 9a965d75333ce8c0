use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::tenant::TenantId;
use crate::models::faq::ReplaceFaqsRequest;
use crate::AppState;

pub async fn list_faqs(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
) -> AppResult<Json<Value>> {
    let faqs = state.store.list_faqs(tenant.0).await;
    Ok(Json(json!({ "faqs": faqs })))
}

/// Full overwrite of the tenant's FAQ list, not a merge.
pub async fn replace_faqs(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
    Json(body): Json<ReplaceFaqsRequest>,
) -> AppResult<Json<Value>> {
    let faqs = state.store.replace_faqs(tenant.0, body.faqs).await;
    Ok(Json(json!({ "faqs": faqs })))
}
