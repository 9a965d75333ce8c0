use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Clone, Copy)]
pub struct TenantId(pub Uuid);

/// Middleware: resolves the tenant from the business-id header.
/// Absent, unparseable, or unknown ids are all a 401.
pub async fn resolve_tenant(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let raw = req
        .headers()
        .get(&state.config.tenant.header_name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing business id header".into()))?;

    let business_id = Uuid::parse_str(raw)
        .map_err(|_| AppError::Unauthorized("Invalid business id".into()))?;

    state
        .store
        .get_business(business_id)
        .await
        .ok_or_else(|| AppError::Unauthorized("Unknown business".into()))?;

    req.extensions_mut().insert(TenantId(business_id));
    Ok(next.run(req).await)
}
