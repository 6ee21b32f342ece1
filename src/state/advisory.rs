//! Crop advisory data shown on the dashboard.
//!
//! The only provider today is `StaticAdvisoryProvider`, which returns a fixed
//! record. A real recommendation source plugs in by implementing
//! `AdvisoryProvider`.

#[cfg(test)]
#[path = "advisory_test.rs"]
mod advisory_test;

use serde::{Deserialize, Serialize};

/// Recommendation fields for an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRecord {
    pub crop_to_plant: String,
    pub planting_time: String,
    pub weather_forecast: String,
    pub fertilizers: Vec<String>,
    pub best_yield_time: String,
    pub worst_yield_time: String,
    pub precautions: Vec<String>,
}

impl AdvisoryRecord {
    /// Fertilizers as a single comma-separated line.
    pub fn fertilizer_summary(&self) -> String {
        self.fertilizers.join(", ")
    }
}

/// Source of the advisory record.
#[allow(async_fn_in_trait)]
pub trait AdvisoryProvider {
    async fn fetch(&self) -> AdvisoryRecord;
}

/// Returns the same placeholder record on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAdvisoryProvider;

impl AdvisoryProvider for StaticAdvisoryProvider {
    async fn fetch(&self) -> AdvisoryRecord {
        AdvisoryRecord {
            crop_to_plant: "Wheat".to_owned(),
            planting_time: "October to November".to_owned(),
            weather_forecast: "Sunny with occasional showers".to_owned(),
            fertilizers: vec!["Nitrogen".to_owned(), "Phosphorus".to_owned(), "Potassium".to_owned()],
            best_yield_time: "March to April".to_owned(),
            worst_yield_time: "June to July".to_owned(),
            precautions: vec![
                "Irrigate regularly".to_owned(),
                "Monitor for pests and diseases".to_owned(),
            ],
        }
    }
}
