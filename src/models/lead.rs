use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
    pub name: String,
    pub contact: String,
    pub service: Option<String>,
    pub budget: Option<f64>,
    pub source: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub name: String,
    pub contact: String,
    pub service: Option<String>,
    pub budget: Option<f64>,
    pub source: Option<String>,
    pub notes: Option<String>,
}
