//! Map client controller for RoadPulse road-condition reports.
//!
//! [`MapClient`] owns the map view, the single point layer and the stats
//! panel, and keeps them in sync with the backend:
//!
//! - `initialize` draws the base map once
//! - `load` geolocates and fetches points and stats concurrently
//! - `start_polling` refreshes points on a fixed interval until
//!   `stop_polling` or `shutdown`
//! - `delete_point` runs the administrator's repair flow
//!
//! # Architecture
//!
//! - `Rc<MapClient>` with `RefCell`/`Cell` fields, shared by the polling
//!   timer and UI callbacks on one thread (browser event loop or a tokio
//!   `LocalSet`)
//! - No borrow is held across an `.await`; concurrent refreshes are
//!   last-writer-wins on the point layer
//! - Platform seams: [`RoadApi`], [`Frontend`], [`Geolocator`], [`Scheduler`]
//!
//! # Example
//!
//! ```rust,ignore
//! let client = Rc::new(MapClient::new(api, frontend, config, Capability::Viewer, DisplayZone::Local));
//! client.initialize(client.config().default_view);
//! client.start_polling(&scheduler);
//! spawn_local(async move { client.load(&geolocator).await });
//! ```

pub mod config;
pub mod frontend;
pub mod layer;
pub mod locate;
mod polling;
mod refresh;
mod repair;
pub mod schedule;

#[cfg(test)]
mod testing;

pub use config::{ClientConfig, TileLayerConfig};
pub use frontend::Frontend;
pub use layer::{LayerState, PointLayer};
pub use locate::{FixedLocation, Geolocator, LocateError, NoGeolocation};
pub use repair::RepairOutcome;
pub use schedule::{LocalTask, PollHandle, Scheduler, TaskFactory};

use log::{info, warn};
use rp_core::{MapView, RoadApi, Stats};
use rp_render::{Capability, DisplayZone, Renderer};
use std::cell::{Cell, Ref, RefCell};

/// Controller for one map view and its point layer.
pub struct MapClient<A, F> {
    api: A,
    frontend: F,
    config: ClientConfig,
    renderer: Renderer,
    capability: Capability,
    view: Cell<MapView>,
    initialized: Cell<bool>,
    layer: RefCell<PointLayer>,
    stats: RefCell<Option<Stats>>,
    legend_visible: Cell<bool>,
    poller: RefCell<Option<Box<dyn PollHandle>>>,
}

impl<A: RoadApi, F: Frontend> MapClient<A, F> {
    /// `capability` gates the repair control in popups. `zone` is where
    /// popup dates are shown.
    pub fn new(
        api: A,
        frontend: F,
        config: ClientConfig,
        capability: Capability,
        zone: DisplayZone,
    ) -> Self {
        let renderer = Renderer::new(config.palette.clone(), config.locale, zone);
        Self {
            api,
            frontend,
            view: Cell::new(config.default_view),
            legend_visible: Cell::new(config.legend_visible),
            config,
            renderer,
            capability,
            initialized: Cell::new(false),
            layer: RefCell::new(PointLayer::default()),
            stats: RefCell::new(None),
            poller: RefCell::new(None),
        }
    }

    /// Create the map view and base tile layer. Later calls are ignored.
    pub fn initialize(&self, view: MapView) {
        if self.initialized.replace(true) {
            warn!("Map already initialized; ignoring");
            return;
        }
        self.view.set(view);
        self.frontend.show_map(&view, &self.config.tiles);
        self.frontend.set_legend_visible(self.legend_visible.get());
        info!(
            "Map initialized at {:.4}, {:.4} zoom {}",
            view.center.lat, view.center.lon, view.zoom
        );
    }

    /// Startup fetches: geolocation, points and stats, run concurrently.
    /// None of them waits on another.
    pub async fn load<G: Geolocator>(&self, geolocator: &G) {
        let _ = futures::join!(
            self.try_locate_user(geolocator),
            self.refresh_points(),
            self.refresh_stats()
        );
    }

    /// Show or hide the legend. Returns the new visibility.
    pub fn toggle_legend(&self) -> bool {
        let visible = !self.legend_visible.get();
        self.legend_visible.set(visible);
        self.frontend.set_legend_visible(visible);
        visible
    }

    pub fn legend_visible(&self) -> bool {
        self.legend_visible.get()
    }

    pub fn layer(&self) -> Ref<'_, PointLayer> {
        self.layer.borrow()
    }

    /// Last successfully fetched stats.
    pub fn stats(&self) -> Option<Stats> {
        self.stats.borrow().clone()
    }

    pub fn view(&self) -> MapView {
        self.view.get()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Stop all background work owned by this client.
    pub fn shutdown(&self) {
        self.stop_polling();
        info!("Map client shut down");
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{client, point, stats, MockApi};
    use crate::{FixedLocation, LayerState, NoGeolocation};
    use futures::executor::block_on;
    use rp_core::LatLon;
    use rp_render::Capability;

    #[test]
    fn test_initialize_draws_map_once() {
        let client = client(MockApi::default(), Capability::Viewer);
        let view = client.config().default_view;

        client.initialize(view);
        client.initialize(view);

        assert_eq!(client.frontend().maps_shown.get(), 1);
        assert_eq!(client.frontend().legend.get(), Some(false));
        assert_eq!(client.view(), view);
    }

    #[test]
    fn test_legend_toggle_round_trip() {
        let client = client(MockApi::default(), Capability::Viewer);
        let original = client.legend_visible();

        assert_eq!(client.toggle_legend(), !original);
        assert_eq!(client.frontend().legend.get(), Some(!original));
        assert_eq!(client.toggle_legend(), original);
        assert_eq!(client.legend_visible(), original);
        assert_eq!(client.frontend().legend.get(), Some(original));
    }

    #[test]
    fn test_load_fetches_everything_without_location() {
        let api = MockApi::new(vec![point(1, "warning"), point(2, "ok")], stats(2, 0, 0.0));
        let client = client(api, Capability::Viewer);
        client.initialize(client.config().default_view);

        block_on(client.load(&NoGeolocation));

        assert_eq!(client.layer().state(), LayerState::Populated);
        assert_eq!(client.layer().len(), 2);
        assert_eq!(client.api().points_calls.get(), 1);
        assert_eq!(client.api().stats_calls.get(), 1);
        assert!(client.frontend().user_markers.borrow().is_empty());
    }

    #[test]
    fn test_load_is_not_gated_by_failures() {
        let client = client(MockApi::new(vec![point(1, "ok")], stats(1, 0, 0.0)), Capability::Viewer);
        client.api().fail_stats();

        block_on(client.load(&FixedLocation(LatLon::new(45.0, 11.0))));

        assert_eq!(client.layer().len(), 1);
        assert_eq!(client.stats(), None);
        assert_eq!(client.view().center, LatLon::new(45.0, 11.0));
    }
}
