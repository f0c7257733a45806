//! Status color legend.

use crate::state::AppState;
use dioxus::prelude::*;
use rp_core::RoadStatus;
use rp_render::{Locale, Palette};

#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    pub palette: Palette,
    #[props(default)]
    pub locale: Locale,
}

/// One swatch per status, most severe first. Hidden unless
/// `AppState::legend_visible` is set.
#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let state = use_context::<AppState>();
    let display = if (state.legend_visible)() { "block" } else { "none" };
    let labels = props.locale.labels();
    let entries: Vec<(&str, String)> = RoadStatus::ALL
        .iter()
        .map(|s| (labels.status(*s), props.palette.color(*s).to_string()))
        .collect();

    rsx! {
        div {
            id: "map-legend",
            style: "display: {display}; position: absolute; bottom: 24px; right: 8px; z-index: 1000; padding: 8px 12px; background: white; border-radius: 4px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); font-size: 12px;",
            strong { "{labels.legend_title}" }
            for (label, color) in entries {
                div {
                    key: "{label}",
                    style: "display: flex; align-items: center; gap: 6px; margin-top: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 50%; background: {color};",
                    }
                    "{label}"
                }
            }
        }
    }
}
