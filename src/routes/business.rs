use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::business::CreateBusinessRequest;
use crate::AppState;

pub async fn create_business(
    State(state): State<AppState>,
    Json(body): Json<CreateBusinessRequest>,
) -> AppResult<Json<Value>> {
    if body.name.trim().is_empty() || body.industry.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and industry are required".into(),
        ));
    }

    let business = state
        .store
        .create_business(body.name, body.industry, body.timezone)
        .await;

    tracing::info!(business_id = %business.id, "business created");

    Ok(Json(json!({
        "businessId": business.id,
        "business": business,
    })))
}
