//! Reactive page state shared through Dioxus context.
//!
//! The app provides one `AppState` with `use_context_provider`; components
//! and `LeafletFrontend` read and write its signals.

use dioxus::prelude::*;
use rp_render::StatsFields;

/// Shared application state for the RoadPulse map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the first point load is still in flight
    pub loading: Signal<bool>,
    /// Fatal startup error, shown above the map
    pub error_msg: Signal<Option<String>>,
    /// The three stats panel fields
    pub stats: Signal<StatsFields>,
    /// Legend panel visibility
    pub legend_visible: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            stats: Signal::new(StatsFields::default()),
            legend_visible: Signal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
