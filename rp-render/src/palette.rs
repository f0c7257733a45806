use rp_core::RoadStatus;
use serde::{Deserialize, Serialize};

/// Status→color mapping plus circle-marker geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub critical: String,
    pub warning: String,
    pub ok: String,
    /// Circle marker radius in pixels
    pub radius: f64,
    pub fill_opacity: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            critical: "red".to_string(),
            warning: "orange".to_string(),
            ok: "green".to_string(),
            radius: 7.0,
            fill_opacity: 0.8,
        }
    }
}

impl Palette {
    pub fn color(&self, status: RoadStatus) -> &str {
        match status {
            RoadStatus::Critical => &self.critical,
            RoadStatus::Warning => &self.warning,
            RoadStatus::Ok => &self.ok,
        }
    }
}
