use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SuggestedPost {
    pub day: String,
    pub caption: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentPlan {
    pub industry: String,
    #[serde(rename = "weekOf")]
    pub week_of: String,
    pub trends: Vec<String>,
    pub posts: Vec<SuggestedPost>,
    #[serde(rename = "bestTimes")]
    pub best_times: std::collections::BTreeMap<String, String>,
    #[serde(rename = "paydayWindows")]
    pub payday_windows: Vec<String>,
    #[serde(rename = "forecastNote")]
    pub forecast_note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    #[serde(rename = "baselineRevenue")]
    pub baseline_revenue: f64,
    #[serde(rename = "marketingSpend")]
    pub marketing_spend: f64,
    #[serde(rename = "projectedRevenue")]
    pub projected_revenue: i64,
    /// None when marketing spend is zero; ROI is undefined, not infinite.
    pub roi: Option<f64>,
    #[serde(rename = "roiNote", skip_serializing_if = "Option::is_none")]
    pub roi_note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(rename = "baselineRevenue")]
    pub baseline_revenue: Option<f64>,
    #[serde(rename = "marketingSpend")]
    pub marketing_spend: Option<f64>,
}
