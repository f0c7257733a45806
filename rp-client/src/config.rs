//! Client configuration with the municipality's defaults.

use rp_core::{LatLon, MapView};
use rp_render::{Locale, Palette};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default center: Modena.
pub const DEFAULT_CENTER: LatLon = LatLon {
    lat: 44.6471,
    lon: 10.9252,
};
pub const DEFAULT_ZOOM: f64 = 11.5;
/// Zoom used after a successful geolocation.
pub const LOCATE_ZOOM: f64 = 13.0;
/// Ten minutes between point refreshes.
pub const DEFAULT_POLL_SECS: u64 = 600;

/// Base tile layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a>"
                .to_string(),
        }
    }
}

/// Everything a map client needs besides its API and frontend.
///
/// Deserializes from partial JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub default_view: MapView,
    pub locate_zoom: f64,
    pub tiles: TileLayerConfig,
    pub poll_interval_secs: u64,
    pub locale: Locale,
    pub palette: Palette,
    pub legend_visible: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_view: MapView::new(DEFAULT_CENTER, DEFAULT_ZOOM),
            locate_zoom: LOCATE_ZOOM,
            tiles: TileLayerConfig::default(),
            poll_interval_secs: DEFAULT_POLL_SECS,
            locale: Locale::default(),
            palette: Palette::default(),
            legend_visible: false,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Polling period, never shorter than one second.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
