use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "spaza-assist-api",
        "time": chrono::Utc::now(),
    }))
}
