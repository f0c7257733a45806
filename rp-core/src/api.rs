//! The seam between the map client and the RoadPulse backend.

use crate::delete::DeleteResponse;
use crate::error::Result;
use crate::road_point::{PointId, RoadPoint};
use crate::stats::Stats;

pub const ROADPOINTS_PATH: &str = "/api/roadpoints";
pub const STATS_PATH: &str = "/api/stats";

/// Path of the removal endpoint for one point.
pub fn delete_point_path(id: PointId) -> String {
    format!("/api/delete-point/{id}")
}

/// Read and repair operations exposed by the backend.
///
/// Futures are not required to be `Send`: the map client runs on a single
/// event-loop thread (browser) or inside a tokio `LocalSet` (CLI).
#[allow(async_fn_in_trait)]
pub trait RoadApi {
    /// `GET /api/roadpoints`
    async fn fetch_points(&self) -> Result<Vec<RoadPoint>>;

    /// `GET /api/stats`
    async fn fetch_stats(&self) -> Result<Stats>;

    /// `POST /api/delete-point/{id}`. An `Ok` carries the server's verdict,
    /// which may itself be a failure status.
    async fn delete_point(&self, id: PointId) -> Result<DeleteResponse>;
}

