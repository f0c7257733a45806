//! In-crate doubles for the client's seams.

use crate::config::{ClientConfig, TileLayerConfig};
use crate::frontend::Frontend;
use crate::schedule::{LocalTask, PollHandle, Scheduler, TaskFactory};
use crate::MapClient;
use rp_core::{
    DeleteResponse, LatLon, MapView, PointId, RoadApi, RoadError, RoadPoint, Stats,
};
use rp_render::{Capability, DisplayZone, Marker, StatsFields};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub fn point(id: PointId, status: &str) -> RoadPoint {
    serde_json::from_value(json!({
        "id": id,
        "lat": 44.6 + id as f64 / 100.0,
        "lon": 10.9 + id as f64 / 100.0,
        "status": status,
        "confidence": 0.5,
        "timestamp": "2024-06-01T12:00:00Z",
    }))
    .unwrap()
}

pub fn stats(total: u64, red: u64, km: f64) -> Stats {
    serde_json::from_value(json!({
        "total_points": total,
        "red_count": red,
        "estimated_km": km,
    }))
    .unwrap()
}

/// Scripted backend. `None` in a slot makes that endpoint fail.
#[derive(Default)]
pub struct MockApi {
    pub points: RefCell<Option<Vec<RoadPoint>>>,
    pub stats: RefCell<Option<Stats>>,
    pub delete: RefCell<Option<DeleteResponse>>,
    pub points_calls: Cell<usize>,
    pub stats_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,
    pub last_deleted: Cell<Option<PointId>>,
}

impl MockApi {
    pub fn new(points: Vec<RoadPoint>, stats: Stats) -> Self {
        Self {
            points: RefCell::new(Some(points)),
            stats: RefCell::new(Some(stats)),
            ..Default::default()
        }
    }

    pub fn fail_points(&self) {
        *self.points.borrow_mut() = None;
    }

    pub fn fail_stats(&self) {
        *self.stats.borrow_mut() = None;
    }

    pub fn answer_delete(&self, status: &str, message: Option<&str>) {
        *self.delete.borrow_mut() = Some(DeleteResponse {
            status: status.to_string(),
            message: message.map(str::to_string),
        });
    }
}

fn unreachable_server() -> RoadError {
    RoadError::Transport("connection refused".to_string())
}

impl RoadApi for MockApi {
    async fn fetch_points(&self) -> rp_core::Result<Vec<RoadPoint>> {
        self.points_calls.set(self.points_calls.get() + 1);
        self.points.borrow().clone().ok_or_else(unreachable_server)
    }

    async fn fetch_stats(&self) -> rp_core::Result<Stats> {
        self.stats_calls.set(self.stats_calls.get() + 1);
        self.stats.borrow().clone().ok_or_else(unreachable_server)
    }

    async fn delete_point(&self, id: PointId) -> rp_core::Result<DeleteResponse> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.last_deleted.set(Some(id));
        self.delete.borrow().clone().ok_or_else(unreachable_server)
    }
}

/// Frontend that records every call.
#[derive(Default)]
pub struct RecordingFrontend {
    pub maps_shown: Cell<usize>,
    pub views: RefCell<Vec<MapView>>,
    pub user_markers: RefCell<Vec<(LatLon, String)>>,
    pub drawn: RefCell<Vec<Marker>>,
    pub clears: Cell<usize>,
    pub stats: RefCell<Option<StatsFields>>,
    pub legend: Cell<Option<bool>>,
    pub confirm_answer: Cell<bool>,
    pub confirms: Cell<usize>,
    pub alerts: RefCell<Vec<String>>,
}

impl Frontend for RecordingFrontend {
    fn show_map(&self, view: &MapView, _tiles: &TileLayerConfig) {
        self.maps_shown.set(self.maps_shown.get() + 1);
        self.views.borrow_mut().push(*view);
    }

    fn set_view(&self, view: &MapView) {
        self.views.borrow_mut().push(*view);
    }

    fn add_user_marker(&self, at: LatLon, label: &str) {
        self.user_markers.borrow_mut().push((at, label.to_string()));
    }

    fn clear_points(&self) {
        self.clears.set(self.clears.get() + 1);
        self.drawn.borrow_mut().clear();
    }

    fn draw_point(&self, marker: &Marker) {
        self.drawn.borrow_mut().push(marker.clone());
    }

    fn show_stats(&self, fields: &StatsFields) {
        *self.stats.borrow_mut() = Some(fields.clone());
    }

    fn set_legend_visible(&self, visible: bool) {
        self.legend.set(Some(visible));
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

pub type TestClient = MapClient<MockApi, RecordingFrontend>;

pub fn client(api: MockApi, capability: Capability) -> TestClient {
    MapClient::new(
        api,
        RecordingFrontend::default(),
        ClientConfig::default(),
        capability,
        DisplayZone::utc(),
    )
}

struct Timer {
    period: Duration,
    task: TaskFactory,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler whose ticks are fired by the test.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timers: Rc<RefCell<Vec<Timer>>>,
}

struct ManualHandle(Rc<Cell<bool>>);

impl PollHandle for ManualHandle {
    fn cancel(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, task: TaskFactory) -> Box<dyn PollHandle> {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(Timer {
            period,
            task,
            cancelled: cancelled.clone(),
        });
        Box::new(ManualHandle(cancelled))
    }
}

impl ManualScheduler {
    pub fn active(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    pub fn periods(&self) -> Vec<Duration> {
        self.timers.borrow().iter().map(|t| t.period).collect()
    }

    /// Fire every live timer once and run the produced tasks to completion.
    pub fn tick(&self) {
        let tasks: Vec<LocalTask> = self
            .timers
            .borrow_mut()
            .iter_mut()
            .filter(|t| !t.cancelled.get())
            .map(|t| (t.task)())
            .collect();
        for task in tasks {
            futures::executor::block_on(task);
        }
    }
}
