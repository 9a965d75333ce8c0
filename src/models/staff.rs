use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ROLE_STAFF: &str = "staff";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
    pub name: String,
    #[serde(skip_serializing)]
    pub national_id: String,
    #[serde(skip_serializing)]
    pub pin: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
    #[serde(rename = "nationalId")]
    pub national_id: String,
    pub pin: String,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    #[serde(rename = "nationalId")]
    pub national_id: String,
    pub pin: String,
}

#[derive(Debug, Serialize)]
pub struct StaffPublic {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl From<&Staff> for StaffPublic {
    fn from(s: &Staff) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            role: s.role.clone(),
        }
    }
}
