//! Point and stats refresh. A failed fetch leaves the previous display
//! untouched.

use crate::frontend::Frontend;
use crate::MapClient;
use log::{error, info};
use rp_core::{RoadApi, Stats};
use rp_render::StatsFields;

impl<A: RoadApi, F: Frontend> MapClient<A, F> {
    /// Fetch the point list and redraw the layer from scratch.
    ///
    /// Returns the number of markers drawn.
    pub async fn refresh_points(&self) -> rp_core::Result<usize> {
        let points = match self.api.fetch_points().await {
            Ok(points) => points,
            Err(e) => {
                error!("Point loading error: {e}");
                return Err(e);
            }
        };

        let markers = self.renderer.markers(&points, self.capability);
        self.frontend.clear_points();
        for marker in &markers {
            self.frontend.draw_point(marker);
        }
        let count = markers.len();
        self.layer.borrow_mut().replace(markers);

        info!("Rendered {} road points", count);
        Ok(count)
    }

    /// Fetch the summary counters and update the stats fields.
    pub async fn refresh_stats(&self) -> rp_core::Result<Stats> {
        let stats = match self.api.fetch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                error!("Statistics loading error: {e}");
                return Err(e);
            }
        };

        self.frontend.show_stats(&StatsFields::from(&stats));
        *self.stats.borrow_mut() = Some(stats.clone());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use crate::layer::LayerState;
    use crate::testing::{client, point, stats, MockApi};
    use futures::executor::block_on;
    use rp_core::RoadStatus;
    use rp_render::Capability;

    #[test]
    fn test_one_marker_per_point_with_status_colors() {
        let points = vec![
            point(1, "critical"),
            point(2, "warning"),
            point(3, "ok"),
            point(4, "red"),
            point(5, "something-else"),
        ];
        let client = client(MockApi::new(points, stats(5, 2, 0.1)), Capability::Viewer);

        let count = block_on(client.refresh_points()).unwrap();
        assert_eq!(count, 5);

        let layer = client.layer();
        assert_eq!(layer.len(), 5);
        assert_eq!(layer.state(), LayerState::Populated);
        let colors: Vec<&str> = layer.markers().iter().map(|m| m.color.as_str()).collect();
        assert_eq!(colors, ["red", "orange", "green", "red", "green"]);
        assert_eq!(client.frontend().drawn.borrow().len(), 5);
    }

    #[test]
    fn test_repeated_refresh_does_not_duplicate() {
        let points = vec![point(1, "critical"), point(2, "ok")];
        let client = client(MockApi::new(points, stats(2, 1, 0.0)), Capability::Viewer);

        block_on(client.refresh_points()).unwrap();
        let first: Vec<(f64, f64)> = client.layer().markers().iter().map(|m| (m.lat, m.lon)).collect();
        block_on(client.refresh_points()).unwrap();
        let second: Vec<(f64, f64)> = client.layer().markers().iter().map(|m| (m.lat, m.lon)).collect();

        assert_eq!(first, second);
        assert_eq!(client.frontend().drawn.borrow().len(), 2);
        assert_eq!(client.frontend().clears.get(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_points() {
        let points = vec![point(1, "critical"), point(2, "warning")];
        let client = client(MockApi::new(points, stats(2, 1, 0.0)), Capability::Viewer);
        block_on(client.refresh_points()).unwrap();
        let before = client.layer().markers().to_vec();

        client.api().fail_points();
        assert!(block_on(client.refresh_points()).is_err());

        assert_eq!(client.layer().markers(), before.as_slice());
        assert_eq!(client.layer().state(), LayerState::Populated);
        assert_eq!(*client.frontend().drawn.borrow(), before);
        assert_eq!(client.frontend().clears.get(), 1);
    }

    #[test]
    fn test_failed_first_refresh_stays_empty() {
        let api = MockApi::default();
        let client = client(api, Capability::Viewer);
        assert!(block_on(client.refresh_points()).is_err());
        assert_eq!(client.layer().state(), LayerState::Empty);
        assert_eq!(client.frontend().clears.get(), 0);
    }

    #[test]
    fn test_empty_list_clears_layer() {
        let client = client(MockApi::new(vec![point(1, "ok")], stats(1, 0, 0.0)), Capability::Viewer);
        block_on(client.refresh_points()).unwrap();
        *client.api().points.borrow_mut() = Some(Vec::new());
        assert_eq!(block_on(client.refresh_points()).unwrap(), 0);
        assert!(client.layer().is_empty());
        assert!(client.frontend().drawn.borrow().is_empty());
    }

    #[test]
    fn test_critical_point_scenario() {
        let json = r#"[{"id":1,"lat":44.70,"lon":10.63,"status":"critical","confidence":0.9,"timestamp":"2024-01-01T00:00:00Z"}]"#;
        let points = serde_json::from_str(json).unwrap();
        let client = client(MockApi::new(points, stats(1, 1, 0.0)), Capability::Viewer);

        block_on(client.refresh_points()).unwrap();

        let drawn = client.frontend().drawn.borrow();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].status, RoadStatus::Critical);
        assert_eq!(drawn[0].color, "red");
        let text = drawn[0].popup.text();
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("1/1/2024"));
    }

    #[test]
    fn test_repair_control_follows_capability() {
        let points = vec![point(8, "warning")];
        let viewer = client(MockApi::new(points.clone(), stats(1, 0, 0.0)), Capability::Viewer);
        let admin = client(MockApi::new(points, stats(1, 0, 0.0)), Capability::Administrator);

        block_on(viewer.refresh_points()).unwrap();
        block_on(admin.refresh_points()).unwrap();

        assert!(viewer.layer().markers()[0].popup.repair.is_none());
        let repair = admin.layer().markers()[0].popup.repair.clone().unwrap();
        assert_eq!(repair.point_id, 8);
    }

    #[test]
    fn test_refresh_stats_fills_fields() {
        let client = client(MockApi::new(Vec::new(), stats(120, 31, 2.4)), Capability::Viewer);
        block_on(client.refresh_stats()).unwrap();

        let fields = client.frontend().stats.borrow().clone().unwrap();
        assert_eq!(fields.total_points, "120");
        assert_eq!(fields.red_count, "31");
        assert_eq!(fields.km_mapped, "2.4 km");
        assert_eq!(client.stats().unwrap().total_points, 120);
    }

    #[test]
    fn test_failed_stats_keep_previous_values() {
        let client = client(MockApi::new(Vec::new(), stats(10, 3, 0.2)), Capability::Viewer);
        block_on(client.refresh_stats()).unwrap();

        client.api().fail_stats();
        assert!(block_on(client.refresh_stats()).is_err());

        assert_eq!(client.stats(), Some(stats(10, 3, 0.2)));
        let fields = client.frontend().stats.borrow().clone().unwrap();
        assert_eq!(fields.total_points, "10");
        assert_eq!(fields.km_mapped, "0.2 km");
    }
}
