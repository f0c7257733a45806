use crate::error::Result;
use crate::geo::LatLon;
use crate::status::RoadStatus;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a road point.
pub type PointId = i64;

/// A single road-condition report as served by `GET /api/roadpoints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadPoint {
    pub id: PointId,
    pub lat: f64,
    pub lon: f64,
    pub status: RoadStatus,
    pub confidence: Confidence,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Number of detections merged into this point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_days: Option<i64>,
}

impl RoadPoint {
    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// Decode a `GET /api/roadpoints` body.
///
/// The body must be a JSON array. Entries that are not valid points (a bad
/// timestamp, a missing coordinate) are skipped with a warning; the rest
/// are kept.
pub fn points_from_json(body: &str) -> Result<Vec<RoadPoint>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let mut points = Vec::with_capacity(rows.len());
    for row in rows {
        let id = row.get("id").cloned().unwrap_or(serde_json::Value::Null);
        match serde_json::from_value::<RoadPoint>(row) {
            Ok(point) => points.push(point),
            Err(e) => warn!("Skipping road point {id}: {e}"),
        }
    }
    Ok(points)
}

/// Reliability of a report: a numeric score or a level word ("High", "Low").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Level(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(score) => write!(f, "{score}"),
            Confidence::Level(level) => f.write_str(level),
        }
    }
}

/// Serde adapters accepting both RFC 3339 and naive ISO timestamps.
pub(crate) mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        rp_utils::dates::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => rp_utils::dates::parse_timestamp(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
