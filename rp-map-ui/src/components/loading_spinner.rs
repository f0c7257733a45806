//! Loading indicator shown over the map until the first point load settles.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 8px; left: 50%; transform: translateX(-50%); z-index: 1000; padding: 4px 12px; background: rgba(255,255,255,0.9); border-radius: 4px; color: #666; font-size: 13px;",
            "Loading road reports..."
        }
    }
}
