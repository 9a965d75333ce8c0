use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CLOCK_IN: &str = "in";
pub const CLOCK_OUT: &str = "out";

pub const OVERTIME_PENDING: &str = "pending";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub id: Uuid,
    #[serde(rename = "staffId")]
    pub staff_id: Uuid,
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    pub id: Uuid,
    #[serde(rename = "staffId")]
    pub staff_id: Uuid,
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
    pub hours: f64,
    pub reason: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOvertimeRequest {
    pub hours: f64,
    pub reason: String,
}
