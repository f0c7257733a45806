//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/road-map.js`. It is evaluated once at
//! startup and exposed as `window.RoadPulse`. Arguments cross the boundary
//! as JSON literals, so no manual quoting is needed.

use rp_client::TileLayerConfig;
use rp_core::MapView;
use rp_render::Marker;
use serde::Serialize;

// Embed the Leaflet glue at compile time
static ROAD_MAP_JS: &str = include_str!("../assets/js/road-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('RoadPulse JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Serialize a value as a JS literal. Falls back to `null`.
fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Load and evaluate the map glue. Call once at app startup.
pub fn load_map_scripts() {
    let _ = js_sys::eval(ROAD_MAP_JS);
}

/// Create the Leaflet map and base tile layer once Leaflet and the
/// container element both exist.
pub fn create_map(container_id: &str, view: &MapView, tiles: &TileLayerConfig) {
    call_js(&format!(
        "window.RoadPulse.createMap({}, {}, {});",
        js_literal(container_id),
        js_literal(view),
        js_literal(tiles),
    ));
}

pub fn set_view(view: &MapView) {
    call_js(&format!(
        "window.RoadPulse.setView({}, {}, {});",
        view.center.lat, view.center.lon, view.zoom
    ));
}

/// Add the "you are here" marker and open its popup.
pub fn add_user_marker(lat: f64, lon: f64, label: &str) {
    call_js(&format!(
        "window.RoadPulse.addUserMarker({}, {}, {});",
        lat,
        lon,
        js_literal(label)
    ));
}

/// Remove every marker from the point layer.
pub fn clear_points() {
    call_js("window.RoadPulse.clearPoints();");
}

/// Draw one circle marker with its popup.
pub fn draw_point(marker: &Marker) {
    call_js(&format!(
        "window.RoadPulse.drawPoint({}, {});",
        js_literal(marker),
        js_literal(&marker.popup.to_html()),
    ));
}
