//! Reusable Dioxus RSX components for the RoadPulse map.

mod error_display;
mod legend_toggle;
mod loading_spinner;
mod map_container;
mod map_legend;
mod stats_panel;

pub use error_display::ErrorDisplay;
pub use legend_toggle::LegendToggle;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_legend::MapLegend;
pub use stats_panel::StatsPanel;
