use crate::road_point::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary counters served by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_points: u64,
    /// Points whose status is critical
    pub red_count: u64,
    pub estimated_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orange_count: Option<u64>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl Stats {
    pub fn critical_count(&self) -> u64 {
        self.red_count
    }

    pub fn warning_count(&self) -> Option<u64> {
        self.orange_count
    }

    /// The kilometers field as displayed next to the map, e.g. `"12.4 km"`.
    pub fn km_label(&self) -> String {
        format!("{} km", self.estimated_km)
    }
}
