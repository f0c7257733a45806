//! Core types for RoadPulse road-condition reports.
//!
//! - `road_point`, `stats`, `delete`: the JSON shapes served by the backend
//! - `status`: canonical three-level severity and its accepted aliases
//! - `geo`: coordinates and map viewport
//! - `api`: the `RoadApi` seam, plus `HttpRoadApi` behind the `api` feature

pub mod api;
pub mod delete;
pub mod error;
pub mod geo;
pub mod road_point;
pub mod stats;
pub mod status;

#[cfg(feature = "api")]
pub mod http;

pub use api::RoadApi;
pub use delete::DeleteResponse;
pub use error::{Result, RoadError};
pub use geo::{LatLon, MapView};
#[cfg(feature = "api")]
pub use http::{HttpRoadApi, HttpRoadApiBuilder};
pub use road_point::{points_from_json, Confidence, PointId, RoadPoint};
pub use stats::Stats;
pub use status::RoadStatus;
