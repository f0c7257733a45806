//! The display side of the map client.

use crate::config::TileLayerConfig;
use rp_core::{LatLon, MapView};
use rp_render::{Marker, StatsFields};

/// Everything the client draws or asks the user.
///
/// Implemented by the Leaflet bridge in the browser and by the terminal
/// renderer in the CLI. All calls happen on the client's single thread.
pub trait Frontend {
    /// Create the map view and its base tile layer.
    fn show_map(&self, view: &MapView, tiles: &TileLayerConfig);

    fn set_view(&self, view: &MapView);

    /// One-shot marker for the user's own position, popup opened.
    fn add_user_marker(&self, at: LatLon, label: &str);

    /// Remove every road-point marker.
    fn clear_points(&self);

    fn draw_point(&self, marker: &Marker);

    fn show_stats(&self, fields: &StatsFields);

    fn set_legend_visible(&self, visible: bool);

    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Blocking notification.
    fn alert(&self, message: &str);
}
