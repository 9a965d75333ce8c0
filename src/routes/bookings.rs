use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::tenant::TenantId;
use crate::models::booking::CreateBookingRequest;
use crate::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
    Json(body): Json<CreateBookingRequest>,
) -> AppResult<Json<Value>> {
    let booking = state.store.create_booking(tenant.0, body).await;
    Ok(Json(json!(booking)))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
) -> AppResult<Json<Value>> {
    let bookings = state.store.list_bookings(tenant.0).await;
    Ok(Json(json!(bookings)))
}
