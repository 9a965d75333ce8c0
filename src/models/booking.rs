use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub contact: String,
    pub service: String,
    pub when: String,
    #[serde(rename = "staffId")]
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub contact: String,
    pub service: String,
    pub when: String,
    #[serde(rename = "staffId")]
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
}
