//! Headless map: the full client lifecycle against a terminal frontend.

use crate::scheduler::TokioScheduler;
use crate::terminal::TerminalFrontend;
use crate::Connection;
use log::info;
use rp_client::{ClientConfig, FixedLocation, MapClient, NoGeolocation};
use rp_core::LatLon;
use rp_render::{Capability, DisplayZone};
use std::rc::Rc;
use tokio::task::LocalSet;

/// Initialize, load, poll until Ctrl-C, then shut the client down.
pub async fn run_watch(
    connection: &Connection,
    interval_secs: Option<u64>,
    admin: bool,
    home: Option<LatLon>,
) -> anyhow::Result<()> {
    let api = connection.api()?;
    let mut config = ClientConfig {
        locale: connection.locale,
        legend_visible: true,
        ..Default::default()
    };
    if let Some(secs) = interval_secs {
        config.poll_interval_secs = secs;
    }
    let frontend = TerminalFrontend::stdio(connection.locale, config.palette.clone(), false);
    let capability = if admin {
        Capability::Administrator
    } else {
        Capability::Viewer
    };

    let local = LocalSet::new();
    local
        .run_until(async move {
            let client = Rc::new(MapClient::new(
                api,
                frontend,
                config,
                capability,
                DisplayZone::Local,
            ));
            client.initialize(client.config().default_view);
            client.start_polling(&TokioScheduler);
            info!(
                "Watching {} every {}s (Ctrl-C to stop)",
                client.api().base_url(),
                client.config().poll_interval().as_secs()
            );

            match home {
                Some(at) => client.load(&FixedLocation(at)).await,
                None => client.load(&NoGeolocation).await,
            }

            tokio::signal::ctrl_c().await?;
            client.shutdown();
            Ok::<(), anyhow::Error>(())
        })
        .await
}
