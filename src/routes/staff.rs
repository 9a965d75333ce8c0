use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{issue_token, AuthStaff};
use crate::middleware::tenant::TenantId;
use crate::models::attendance::{CreateOvertimeRequest, CLOCK_IN, CLOCK_OUT};
use crate::models::booking::STATUS_CANCELLED;
use crate::models::staff::{CreateStaffRequest, LoginRequest, StaffPublic};
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    let staff = state
        .store
        .find_staff_login(tenant.0, &body.name, &body.national_id, &body.pin)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    let token = issue_token(
        staff.id,
        staff.business_id,
        &staff.role,
        &state.config.jwt.secret,
        state.config.jwt.session_expiry_secs,
    )?;

    Ok(Json(json!({
        "token": token,
        "staff": StaffPublic::from(&staff),
    })))
}

pub async fn create_staff(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantId>,
    Json(body): Json<CreateStaffRequest>,
) -> AppResult<Json<Value>> {
    if body.name.trim().is_empty() || body.national_id.trim().is_empty() || body.pin.is_empty() {
        return Err(AppError::BadRequest(
            "name, nationalId and pin are required".into(),
        ));
    }

    let staff = state.store.create_staff(tenant.0, body).await;

    Ok(Json(json!({ "id": staff.id })))
}

pub async fn agenda(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthStaff>,
) -> AppResult<Json<Value>> {
    let bookings = state
        .store
        .staff_agenda(staff.business_id, staff.id, STATUS_CANCELLED)
        .await;

    Ok(Json(json!(bookings)))
}

pub async fn clock_in(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthStaff>,
) -> AppResult<Json<Value>> {
    state
        .store
        .record_attendance(staff.business_id, staff.id, CLOCK_IN)
        .await;
    Ok(Json(json!({ "ok": true })))
}

pub async fn clock_out(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthStaff>,
) -> AppResult<Json<Value>> {
    state
        .store
        .record_attendance(staff.business_id, staff.id, CLOCK_OUT)
        .await;
    Ok(Json(json!({ "ok": true })))
}

pub async fn overtime(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthStaff>,
    Json(body): Json<CreateOvertimeRequest>,
) -> AppResult<Json<Value>> {
    if body.hours <= 0.0 {
        return Err(AppError::BadRequest("hours must be positive".into()));
    }

    let request = state
        .store
        .create_overtime(staff.business_id, staff.id, body.hours, body.reason)
        .await;

    Ok(Json(json!(request)))
}
