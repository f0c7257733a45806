//! Shared Dioxus components and Leaflet bridge for the RoadPulse map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`
//! - `browser`: browser implementations of the map client's seams
//! - `page`: page globals (`userRole`, `roadpulseConfig`, origin, offset)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (stats panel, legend, map container)

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
