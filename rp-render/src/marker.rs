use crate::locale::{LabelSet, Locale};
use crate::palette::Palette;
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use rp_core::{PointId, RoadPoint, RoadStatus, Stats};
use rp_utils::dates::format_display_date;
use rp_utils::html::escape;
use serde::Serialize;

/// Role string that grants the repair control.
pub const ADMIN_ROLE: &str = "admin";

/// What the current user may do on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capability {
    #[default]
    Viewer,
    Administrator,
}

impl Capability {
    /// Map the page's optional `userRole` to a capability.
    pub fn from_role(role: Option<&str>) -> Self {
        match role {
            Some(ADMIN_ROLE) => Capability::Administrator,
            _ => Capability::Viewer,
        }
    }

    pub fn can_repair(&self) -> bool {
        matches!(self, Capability::Administrator)
    }
}

/// A circle marker ready to hand to a map surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: PointId,
    pub lat: f64,
    pub lon: f64,
    pub status: RoadStatus,
    pub color: String,
    pub radius: f64,
    pub fill_opacity: f64,
    pub popup: Popup,
}

/// Popup content bound to a marker. All strings are already localized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub status_heading: String,
    pub status_label: String,
    pub confidence_heading: String,
    pub confidence: String,
    pub date: String,
    pub repair: Option<RepairControl>,
}

/// The administrator's "mark as repaired" button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairControl {
    pub point_id: PointId,
    pub label: String,
}

impl Popup {
    /// Plain-text rendering, one field per line.
    pub fn text(&self) -> String {
        let mut out = format!(
            "{}: {}\n{}: {}\n{}",
            self.status_heading, self.status_label, self.confidence_heading, self.confidence, self.date
        );
        if let Some(repair) = &self.repair {
            out.push_str(&format!("\n[{}]", repair.label));
        }
        out
    }

    /// HTML for a Leaflet popup.
    ///
    /// The repair button carries `class="rp-repair"` and `data-point-id`;
    /// the page routes its clicks back into the client.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div style=\"text-align: center;\"><b>{}:</b> {}<br><b>{}:</b> {}<br><small>{}</small></div>",
            escape(&self.status_heading),
            escape(&self.status_label),
            escape(&self.confidence_heading),
            escape(&self.confidence),
            escape(&self.date),
        );
        if let Some(repair) = &self.repair {
            html.push_str(&format!(
                "<hr><button class=\"rp-repair\" data-point-id=\"{}\" style=\"background:#dc3545; color:white; border:none; border-radius:4px; padding:5px 10px; width:100%; cursor:pointer;\">{}</button>",
                repair.point_id,
                escape(&repair.label),
            ));
        }
        html
    }
}

/// The three stats panel fields, formatted for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsFields {
    pub total_points: String,
    pub red_count: String,
    pub km_mapped: String,
}

impl From<&Stats> for StatsFields {
    fn from(stats: &Stats) -> Self {
        Self {
            total_points: stats.total_points.to_string(),
            red_count: stats.red_count.to_string(),
            km_mapped: stats.km_label(),
        }
    }
}

/// Time zone popup dates are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The viewer's system zone. Each date uses the offset in force at its
    /// own instant, so daylight-saving changes are respected. On wasm32
    /// chrono reads it from the JS `Date`.
    #[default]
    Local,
    /// One offset for every date.
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }

    pub fn format_date(&self, ts: &DateTime<Utc>, pattern: &str) -> String {
        match self {
            DisplayZone::Local => format_display_date(ts, &Local, pattern),
            DisplayZone::Fixed(offset) => format_display_date(ts, offset, pattern),
        }
    }
}

/// Turns road points into markers using one palette and one locale.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    locale: Locale,
    zone: DisplayZone,
}

impl Renderer {
    /// `zone` is where popup dates are shown; browsers and the CLI pass
    /// [`DisplayZone::Local`].
    pub fn new(palette: Palette, locale: Locale, zone: DisplayZone) -> Self {
        Self {
            palette,
            locale,
            zone,
        }
    }

    pub fn labels(&self) -> &'static LabelSet {
        self.locale.labels()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn marker(&self, point: &RoadPoint, capability: Capability) -> Marker {
        let labels = self.labels();
        let repair = capability.can_repair().then(|| RepairControl {
            point_id: point.id,
            label: labels.repair_button.to_string(),
        });

        Marker {
            id: point.id,
            lat: point.lat,
            lon: point.lon,
            status: point.status,
            color: self.palette.color(point.status).to_string(),
            radius: self.palette.radius,
            fill_opacity: self.palette.fill_opacity,
            popup: Popup {
                status_heading: labels.popup_status.to_string(),
                status_label: labels.status(point.status).to_string(),
                confidence_heading: labels.popup_confidence.to_string(),
                confidence: point.confidence.to_string(),
                date: self.zone.format_date(&point.timestamp, labels.date_pattern),
                repair,
            },
        }
    }

    pub fn markers(&self, points: &[RoadPoint], capability: Capability) -> Vec<Marker> {
        points.iter().map(|p| self.marker(p, capability)).collect()
    }
}
