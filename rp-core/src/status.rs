use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Three-level severity of a road-condition report.
///
/// The backend has shipped several vocabularies over time
/// (`red/orange/green`, `rossa/gialla`, `ok/warning/critical`). They all
/// collapse to this enum; anything unrecognized is treated as `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum RoadStatus {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl RoadStatus {
    pub const ALL: [RoadStatus; 3] = [RoadStatus::Critical, RoadStatus::Warning, RoadStatus::Ok];

    /// Map any known status word to its severity. Case-insensitive.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" | "red" | "rossa" | "rosso" => RoadStatus::Critical,
            "warning" | "orange" | "yellow" | "gialla" | "giallo" | "arancione" => {
                RoadStatus::Warning
            }
            _ => RoadStatus::Ok,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadStatus::Ok => "ok",
            RoadStatus::Warning => "warning",
            RoadStatus::Critical => "critical",
        }
    }
}

impl From<String> for RoadStatus {
    fn from(s: String) -> Self {
        RoadStatus::parse_lenient(&s)
    }
}

impl Serialize for RoadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for RoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RoadStatus;

    #[test]
    fn test_canonical_names() {
        assert_eq!(RoadStatus::parse_lenient("critical"), RoadStatus::Critical);
        assert_eq!(RoadStatus::parse_lenient("warning"), RoadStatus::Warning);
        assert_eq!(RoadStatus::parse_lenient("ok"), RoadStatus::Ok);
    }

    #[test]
    fn test_legacy_vocabularies() {
        assert_eq!(RoadStatus::parse_lenient("red"), RoadStatus::Critical);
        assert_eq!(RoadStatus::parse_lenient("Rossa"), RoadStatus::Critical);
        assert_eq!(RoadStatus::parse_lenient("orange"), RoadStatus::Warning);
        assert_eq!(RoadStatus::parse_lenient("GIALLA"), RoadStatus::Warning);
        assert_eq!(RoadStatus::parse_lenient("green"), RoadStatus::Ok);
        assert_eq!(RoadStatus::parse_lenient("verde"), RoadStatus::Ok);
    }

    #[test]
    fn test_unknown_falls_back_to_ok() {
        assert_eq!(RoadStatus::parse_lenient("purple"), RoadStatus::Ok);
        assert_eq!(RoadStatus::parse_lenient(""), RoadStatus::Ok);
    }

    #[test]
    fn test_serde_round_trip_is_canonical() {
        let parsed: RoadStatus = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, RoadStatus::Critical);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"critical\"");
    }
}
