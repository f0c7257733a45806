//! Best-effort user geolocation.

use crate::frontend::Frontend;
use crate::MapClient;
use log::{info, warn};
use rp_core::{LatLon, MapView, RoadApi};
use thiserror::Error;

/// Why a position could not be obtained.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The platform has no geolocation capability
    #[error("Geolocation not supported")]
    Unsupported,

    /// The user refused to share a position
    #[error("Geolocation permission denied")]
    Denied,

    /// Timeout or position unavailable
    #[error("Geolocation error: {0}")]
    Failed(String),
}

/// Source of the user's position.
#[allow(async_fn_in_trait)]
pub trait Geolocator {
    async fn locate(&self) -> Result<LatLon, LocateError>;
}

/// A platform without geolocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

impl Geolocator for NoGeolocation {
    async fn locate(&self) -> Result<LatLon, LocateError> {
        Err(LocateError::Unsupported)
    }
}

/// A position known ahead of time (e.g. given on the command line).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub LatLon);

impl Geolocator for FixedLocation {
    async fn locate(&self) -> Result<LatLon, LocateError> {
        Ok(self.0)
    }
}

impl<A: RoadApi, F: Frontend> MapClient<A, F> {
    /// Recenter on the user and mark their position. On any failure the
    /// view stays where it is; nothing else waits on this.
    pub async fn try_locate_user<G: Geolocator>(&self, geolocator: &G) -> Option<LatLon> {
        match geolocator.locate().await {
            Ok(position) => {
                let view = MapView::new(position, self.config.locate_zoom);
                self.view.set(view);
                self.frontend.set_view(&view);
                self.frontend
                    .add_user_marker(position, self.renderer.labels().user_position);
                info!("Centered map on user at {:.5}, {:.5}", position.lat, position.lon);
                Some(position)
            }
            Err(e) => {
                warn!("{e}; keeping default view");
                None
            }
        }
    }
}
