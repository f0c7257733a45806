//! Mark a report as repaired from the command line.

use crate::terminal::TerminalFrontend;
use crate::Connection;
use rp_client::{ClientConfig, MapClient, RepairOutcome};
use rp_render::{Capability, DisplayZone, Palette};

/// Map the flow's outcome onto the process result. A declined prompt is
/// not an error.
pub fn check_outcome(id: i64, outcome: RepairOutcome) -> anyhow::Result<()> {
    match outcome {
        RepairOutcome::Repaired | RepairOutcome::Declined => Ok(()),
        RepairOutcome::Rejected(message) => anyhow::bail!(
            "server refused to repair point {id}: {}",
            message.as_deref().unwrap_or("no message")
        ),
        RepairOutcome::Failed => anyhow::bail!("could not reach the server to repair point {id}"),
    }
}

/// Runs the same confirm, delete and refresh sequence as the map popup.
/// The server decides whether the session may delete.
pub async fn run_repair(connection: &Connection, id: i64, yes: bool) -> anyhow::Result<()> {
    let api = connection.api()?;
    let config = ClientConfig {
        locale: connection.locale,
        ..Default::default()
    };
    let frontend = TerminalFrontend::stdio(connection.locale, Palette::default(), yes);
    let client = MapClient::new(
        api,
        frontend,
        config,
        Capability::Administrator,
        DisplayZone::Local,
    );
    check_outcome(id, client.delete_point(id).await)
}
