//! Read-only queries: the report list and the summary counters.

use crate::{Connection, OutputFormat};
use log::info;
use rp_core::{RoadApi, RoadPoint, Stats};
use rp_render::{Capability, DisplayZone, Palette, Renderer, StatsFields};
use serde::Serialize;

/// One CSV/table row per report.
#[derive(Debug, Serialize)]
struct PointRow<'a> {
    id: i64,
    lat: f64,
    lon: f64,
    status: &'a str,
    color: &'a str,
    confidence: String,
    timestamp: String,
}

fn rows<'a>(points: &'a [RoadPoint], palette: &'a Palette) -> Vec<PointRow<'a>> {
    points
        .iter()
        .map(|p| PointRow {
            id: p.id,
            lat: p.lat,
            lon: p.lon,
            status: p.status.as_str(),
            color: palette.color(p.status),
            confidence: p.confidence.to_string(),
            timestamp: p.timestamp.to_rfc3339(),
        })
        .collect()
}

pub fn points_csv(points: &[RoadPoint], palette: &Palette) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows(points, palette) {
        wtr.serialize(row)?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Fixed-width table with localized status labels and dates.
pub fn points_table(points: &[RoadPoint], renderer: &Renderer) -> String {
    let mut out = format!(
        "{:>8}  {:>10}  {:>10}  {:<10}  {:<10}  {}\n",
        "ID", "LAT", "LON", "STATUS", "CONF", "DATE"
    );
    for marker in renderer.markers(points, Capability::Viewer) {
        out.push_str(&format!(
            "{:>8}  {:>10.5}  {:>10.5}  {:<10}  {:<10}  {}\n",
            marker.id,
            marker.lat,
            marker.lon,
            marker.popup.status_label,
            marker.popup.confidence,
            marker.popup.date,
        ));
    }
    out
}

pub fn stats_report(stats: &Stats, renderer: &Renderer) -> String {
    let labels = renderer.labels();
    let fields = StatsFields::from(stats);
    let mut out = format!(
        "{}: {}\n{}: {}\n{}: {}\n",
        labels.stats_total,
        fields.total_points,
        labels.stats_critical,
        fields.red_count,
        labels.stats_km,
        fields.km_mapped,
    );
    if let Some(warning) = stats.warning_count() {
        out.push_str(&format!("{}: {}\n", labels.status_warning, warning));
    }
    if let Some(updated) = stats.last_update {
        out.push_str(&format!("Last update: {}\n", updated.to_rfc3339()));
    }
    out
}

fn renderer(connection: &Connection) -> Renderer {
    Renderer::new(Palette::default(), connection.locale, DisplayZone::Local)
}

pub async fn run_points(connection: &Connection, format: OutputFormat) -> anyhow::Result<()> {
    let api = connection.api()?;
    let points = api.fetch_points().await?;
    info!("Fetched {} points from {}", points.len(), api.base_url());

    let output = match format {
        OutputFormat::Table => points_table(&points, &renderer(connection)),
        OutputFormat::Csv => points_csv(&points, &Palette::default())?,
        OutputFormat::Json => serde_json::to_string_pretty(&points)? + "\n",
    };
    print!("{output}");
    Ok(())
}

pub async fn run_stats(connection: &Connection) -> anyhow::Result<()> {
    let api = connection.api()?;
    let stats = api.fetch_stats().await?;
    print!("{}", stats_report(&stats, &renderer(connection)));
    Ok(())
}
