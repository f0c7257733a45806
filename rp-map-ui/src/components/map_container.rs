//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet mounts into
    #[props(default = "map".to_string())]
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 500)]
    pub min_height: u32,
    /// Overlays drawn above the map (spinner, legend)
    pub children: Element,
}

/// A positioned container div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
            {props.children}
        }
    }
}
