//! Browser implementations of the map client's seams.
//!
//! - [`LeafletFrontend`]: map drawing through the JS bridge, stats and
//!   legend through Dioxus signals, dialogs through `window`
//! - [`BrowserGeolocator`]: `navigator.geolocation`
//! - [`IntervalScheduler`]: `setInterval` + `spawn_local`

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use futures::channel::oneshot;
use log::warn;
use rp_client::{
    Frontend, Geolocator, LocateError, PollHandle, Scheduler, TaskFactory, TileLayerConfig,
};
use rp_core::{LatLon, MapView, PointId};
use rp_render::{Marker, StatsFields};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Name of the global the popup repair buttons call.
const REPAIR_HANDLER: &str = "roadpulseRepair";

/// Leaflet-backed map plus signal-backed panels.
pub struct LeafletFrontend {
    container_id: String,
    state: AppState,
}

impl LeafletFrontend {
    pub fn new(container_id: &str, state: AppState) -> Self {
        Self {
            container_id: container_id.to_string(),
            state,
        }
    }
}

impl Frontend for LeafletFrontend {
    fn show_map(&self, view: &MapView, tiles: &TileLayerConfig) {
        js_bridge::create_map(&self.container_id, view, tiles);
    }

    fn set_view(&self, view: &MapView) {
        js_bridge::set_view(view);
    }

    fn add_user_marker(&self, at: LatLon, label: &str) {
        js_bridge::add_user_marker(at.lat, at.lon, label);
    }

    fn clear_points(&self) {
        js_bridge::clear_points();
    }

    fn draw_point(&self, marker: &Marker) {
        js_bridge::draw_point(marker);
    }

    fn show_stats(&self, fields: &StatsFields) {
        let mut stats = self.state.stats;
        stats.set(fields.clone());
    }

    fn set_legend_visible(&self, visible: bool) {
        let mut legend = self.state.legend_visible;
        legend.set(visible);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// `navigator.geolocation.getCurrentPosition`, as a future.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocator;

fn coordinate(position: &JsValue, field: &str) -> Option<f64> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    js_sys::Reflect::get(&coords, &JsValue::from_str(field))
        .ok()?
        .as_f64()
}

impl Geolocator for BrowserGeolocator {
    async fn locate(&self) -> Result<LatLon, LocateError> {
        let geolocation = web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or(LocateError::Unsupported)?;

        let (tx, rx) = oneshot::channel::<Result<LatLon, LocateError>>();
        let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

        let on_success = {
            let tx = tx.clone();
            Closure::once_into_js(move |position: JsValue| {
                let result = match (coordinate(&position, "latitude"), coordinate(&position, "longitude")) {
                    (Some(lat), Some(lon)) => Ok(LatLon::new(lat, lon)),
                    _ => Err(LocateError::Failed("position without coordinates".to_string())),
                };
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(result);
                }
            })
        };
        let on_error = {
            let tx = tx.clone();
            Closure::once_into_js(move |error: JsValue| {
                let code = js_sys::Reflect::get(&error, &JsValue::from_str("code"))
                    .ok()
                    .and_then(|c| c.as_f64());
                let result = match code {
                    // PERMISSION_DENIED
                    Some(c) if c == 1.0 => Err(LocateError::Denied),
                    _ => {
                        let message = js_sys::Reflect::get(&error, &JsValue::from_str("message"))
                            .ok()
                            .and_then(|m| m.as_string())
                            .unwrap_or_else(|| "position unavailable".to_string());
                        Err(LocateError::Failed(message))
                    }
                };
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(result);
                }
            })
        };

        geolocation
            .get_current_position_with_error_callback(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            )
            .map_err(|e| LocateError::Failed(format!("{e:?}")))?;

        rx.await
            .unwrap_or_else(|_| Err(LocateError::Failed("request dropped".to_string())))
    }
}

/// `setInterval`-driven scheduler. Each tick spawns its task on the
/// browser's microtask queue; ticks may overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

struct IntervalHandle {
    id: Option<i32>,
    _tick: Closure<dyn FnMut()>,
}

impl PollHandle for IntervalHandle {
    fn cancel(&mut self) {
        if let (Some(id), Some(window)) = (self.id.take(), web_sys::window()) {
            window.clear_interval_with_handle(id);
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        // The closure is freed with the handle; the timer must go first.
        self.cancel();
    }
}

impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration, mut task: TaskFactory) -> Box<dyn PollHandle> {
        let tick = Closure::<dyn FnMut()>::new(move || {
            wasm_bindgen_futures::spawn_local(task());
        });
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = web_sys::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                millis,
            )
            .ok()
        });
        if id.is_none() {
            warn!("setInterval unavailable; polling disabled");
        }
        Box::new(IntervalHandle { id, _tick: tick })
    }
}

/// Route popup repair-button clicks to `handler`.
pub fn register_repair_handler(handler: impl FnMut(PointId) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut handler = handler;
    let callback = Closure::<dyn FnMut(f64)>::new(move |id: f64| handler(id as PointId));
    if js_sys::Reflect::set(&window, &JsValue::from_str(REPAIR_HANDLER), callback.as_ref()).is_err() {
        warn!("Could not register repair handler");
    }
    // Lives for the page's lifetime.
    callback.forget();
}

/// Call `handler(visible)` whenever the page is hidden or shown again,
/// and `handler(false)` on `pagehide`.
pub fn on_page_visibility(handler: impl FnMut(bool) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let handler = std::rc::Rc::new(std::cell::RefCell::new(handler));

    let visibility = {
        let handler = handler.clone();
        let document = document.clone();
        Closure::<dyn FnMut()>::new(move || (handler.borrow_mut())(!document.hidden()))
    };
    let page_hide = Closure::<dyn FnMut()>::new(move || (handler.borrow_mut())(false));

    let _ = document
        .add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("pagehide", page_hide.as_ref().unchecked_ref());
    visibility.forget();
    page_hide.forget();
}
