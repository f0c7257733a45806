//! Legend show/hide button.

use dioxus::prelude::*;
use rp_render::Locale;

#[derive(Props, Clone, PartialEq)]
pub struct LegendToggleProps {
    #[props(default)]
    pub locale: Locale,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn LegendToggle(props: LegendToggleProps) -> Element {
    let label = props.locale.labels().legend_toggle;
    rsx! {
        button {
            style: "padding: 4px 10px; font-size: 13px; cursor: pointer;",
            onclick: move |_| props.on_toggle.call(()),
            "{label}"
        }
    }
}
