//! Summary counters under the map.

use crate::state::AppState;
use dioxus::prelude::*;
use rp_render::Locale;

#[derive(Props, Clone, PartialEq)]
pub struct StatsPanelProps {
    #[props(default)]
    pub locale: Locale,
}

/// Total points, critical count and km mapped, read from `AppState::stats`.
#[component]
pub fn StatsPanel(props: StatsPanelProps) -> Element {
    let state = use_context::<AppState>();
    let stats = state.stats.read().clone();
    let labels = props.locale.labels();

    rsx! {
        div {
            style: "display: flex; gap: 24px; justify-content: center; margin: 8px 0; font-size: 14px;",
            StatItem { label: labels.stats_total.to_string(), id: "total-points".to_string(), value: stats.total_points }
            StatItem { label: labels.stats_critical.to_string(), id: "red-count".to_string(), value: stats.red_count }
            StatItem { label: labels.stats_km.to_string(), id: "km-mapped".to_string(), value: stats.km_mapped }
        }
    }
}

#[component]
fn StatItem(label: String, id: String, value: String) -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            div { style: "font-size: 11px; color: #666;", "{label}" }
            strong { id: "{id}", "{value}" }
        }
    }
}
