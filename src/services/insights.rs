use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::insights::{ContentPlan, Forecast, SuggestedPost};

/// Month-end payday uplift applied to baseline revenue.
pub const PAYDAY_LIFT: f64 = 0.12;
/// Uplift attributed to riding the current content trends.
pub const TREND_LIFT: f64 = 0.05;

pub const DEFAULT_BASELINE_REVENUE: f64 = 10000.0;
pub const DEFAULT_MARKETING_SPEND: f64 = 1500.0;

const TRENDS: [&str; 4] = [
    "Before/after transformations",
    "Day-in-the-life shop reels",
    "Customer shout-out posts",
    "Month-end combo specials",
];

const PAYDAY_WINDOWS: [&str; 2] = ["month-end (25th-31st)", "early-month (1st-3rd)"];

const FORECAST_NOTE: &str =
    "Expect the strongest walk-in traffic in the payday windows; post the day before.";

/// Canned weekly content plan. Deterministic for a given industry and
/// date; the date is only echoed back, never used to vary content.
pub fn weekly_plan(industry: &str, week_of: NaiveDate) -> ContentPlan {
    let tag = industry.to_lowercase().replace(' ', "");

    let posts = vec![
        SuggestedPost {
            day: "Monday".to_string(),
            caption: format!(
                "Fresh week, fresh start. Tag a friend who needs a #{tag} visit."
            ),
            format: "photo".to_string(),
        },
        SuggestedPost {
            day: "Wednesday".to_string(),
            caption: format!(
                "Midweek special: mention this post for a loyalty stamp. #{tag} #local"
            ),
            format: "reel".to_string(),
        },
        SuggestedPost {
            day: "Friday".to_string(),
            caption: format!(
                "Payday weekend is here. Book your #{tag} slot before we fill up."
            ),
            format: "story".to_string(),
        },
    ];

    let mut best_times = BTreeMap::new();
    best_times.insert("Monday".to_string(), "17:30".to_string());
    best_times.insert("Wednesday".to_string(), "12:30".to_string());
    best_times.insert("Friday".to_string(), "16:00".to_string());
    best_times.insert("Saturday".to_string(), "09:00".to_string());

    ContentPlan {
        industry: industry.to_string(),
        week_of: week_of.to_string(),
        trends: TRENDS.iter().map(|t| t.to_string()).collect(),
        posts,
        best_times,
        payday_windows: PAYDAY_WINDOWS.iter().map(|w| w.to_string()).collect(),
        forecast_note: FORECAST_NOTE.to_string(),
    }
}

/// Toy revenue projection: both lifts applied to baseline, ROI on the
/// incremental profit. A zero spend yields an undefined ROI (None),
/// never NaN or infinity.
pub fn forecast(baseline_revenue: Option<f64>, marketing_spend: Option<f64>) -> Forecast {
    let baseline = baseline_revenue.unwrap_or(DEFAULT_BASELINE_REVENUE);
    let spend = marketing_spend.unwrap_or(DEFAULT_MARKETING_SPEND);

    let projected = (baseline * (1.0 + PAYDAY_LIFT + TREND_LIFT)).round();
    let (roi, roi_note) = if spend == 0.0 {
        (
            None,
            Some("ROI undefined with zero marketing spend".to_string()),
        )
    } else {
        let raw = ((projected - baseline) - spend) / spend;
        (Some((raw * 100.0).round() / 100.0), None)
    };

    Forecast {
        baseline_revenue: baseline,
        marketing_spend: spend,
        projected_revenue: projected as i64,
        roi,
        roi_note,
    }
}
