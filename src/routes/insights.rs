use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::tenant::TenantId;
use crate::models::insights::ForecastRequest;
use crate::services::insights;
use crate::AppState;

pub async fn weekly(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
) -> AppResult<Json<Value>> {
    let business = state
        .store
        .get_business(tenant.0)
        .await
        .ok_or_else(|| AppError::Unauthorized("Unknown business".into()))?;

    let plan = insights::weekly_plan(&business.industry, chrono::Utc::now().date_naive());
    Ok(Json(json!(plan)))
}

pub async fn forecast(body: Option<Json<ForecastRequest>>) -> AppResult<Json<Value>> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let result = insights::forecast(req.baseline_revenue, req.marketing_spend);
    Ok(Json(json!(result)))
}
