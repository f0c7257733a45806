//! RoadPulse road-condition map
//!
//! Shows crowd-sourced road reports as colored circle markers on a Leaflet
//! map, with summary counters underneath and a toggleable legend. The host
//! page loads Leaflet and may set `window.userRole` and
//! `window.roadpulseConfig` before this bundle runs.
//!
//! Data flow:
//! 1. On mount: evaluate the Leaflet glue, build the `MapClient` against
//!    the page's own origin and draw the base map.
//! 2. Geolocation, the point fetch and the stats fetch run concurrently.
//! 3. Points are refreshed every poll interval while the page is visible.
//! 4. Popup repair buttons (administrators only) run the delete flow.

use dioxus::prelude::*;
use log::{error, info};
use rp_client::{ClientConfig, MapClient};
use rp_core::HttpRoadApi;
use rp_map_ui::browser::{
    on_page_visibility, register_repair_handler, BrowserGeolocator, IntervalScheduler,
    LeafletFrontend,
};
use rp_map_ui::components::{
    ErrorDisplay, LegendToggle, LoadingSpinner, MapContainer, MapLegend, StatsPanel,
};
use rp_map_ui::state::AppState;
use rp_map_ui::{js_bridge, page};
use rp_render::{Capability, DisplayZone};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// DOM id Leaflet mounts into.
const MAP_CONTAINER_ID: &str = "map";

type BrowserClient = MapClient<HttpRoadApi, LeafletFrontend>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("roadpulse-root"))
        .launch(App);
}

/// Build the client, draw the map and wire page events. Returns `None`
/// when the API client cannot be built.
fn start_client(state: AppState, config: ClientConfig) -> Option<Rc<BrowserClient>> {
    let base = page::origin()?;
    let api = match HttpRoadApi::new(&base) {
        Ok(api) => api,
        Err(e) => {
            error!("Cannot reach RoadPulse API at {base}: {e}");
            return None;
        }
    };
    let capability = Capability::from_role(page::user_role().as_deref());
    let frontend = LeafletFrontend::new(MAP_CONTAINER_ID, state);
    let client = Rc::new(MapClient::new(
        api,
        frontend,
        config,
        capability,
        DisplayZone::Local,
    ));
    info!("RoadPulse map starting ({capability:?})");

    client.initialize(client.config().default_view);
    client.start_polling(&IntervalScheduler);

    if capability.can_repair() {
        let repair_client = Rc::clone(&client);
        register_repair_handler(move |id| {
            let client = Rc::clone(&repair_client);
            spawn_local(async move {
                client.delete_point(id).await;
            });
        });
    }

    let visibility_client = Rc::clone(&client);
    on_page_visibility(move |visible| {
        if visible {
            if !visibility_client.is_polling() {
                visibility_client.start_polling(&IntervalScheduler);
                let client = Rc::clone(&visibility_client);
                spawn_local(async move {
                    let _ = client.refresh_points().await;
                });
            }
        } else {
            visibility_client.stop_polling();
        }
    });

    Some(client)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(page::load_config);
    let mut client: Signal<Option<Rc<BrowserClient>>> = use_signal(|| None);
    let locale = config.locale;
    let palette = config.palette.clone();

    // ─── Effect: build the client once on mount ───
    use_effect(move || {
        js_bridge::load_map_scripts();

        let Some(started) = start_client(state, config.clone()) else {
            state
                .error_msg
                .set(Some("Unable to connect to the RoadPulse server.".to_string()));
            state.loading.set(false);
            return;
        };
        client.set(Some(Rc::clone(&started)));

        spawn(async move {
            started.load(&BrowserGeolocator).await;
            state.loading.set(false);
        });
    });

    let on_toggle = move |_: ()| {
        if let Some(client) = client.read().as_ref() {
            client.toggle_legend();
        }
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_: ()| state.error_msg.set(None),
                }
            }

            MapContainer {
                id: MAP_CONTAINER_ID.to_string(),
                min_height: 560,
                if *state.loading.read() {
                    LoadingSpinner {}
                }
                MapLegend { palette: palette, locale: locale }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-top: 8px;",
                StatsPanel { locale: locale }
                LegendToggle { locale: locale, on_toggle: on_toggle }
            }
        }
    }
}
