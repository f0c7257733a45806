//! Banner for fatal startup errors.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 14px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span { "{props.message}" }
            if let Some(handler) = props.on_dismiss {
                button {
                    style: "border: none; background: none; color: inherit; font-size: 16px; cursor: pointer;",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
