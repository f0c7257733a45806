use rp_core::RoadStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of every string the map shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    It,
}

/// Localized strings for markers, popups, dialogs and the stats panel.
#[derive(Debug, PartialEq)]
pub struct LabelSet {
    pub status_ok: &'static str,
    pub status_warning: &'static str,
    pub status_critical: &'static str,
    pub popup_status: &'static str,
    pub popup_confidence: &'static str,
    pub repair_button: &'static str,
    pub confirm_repair: &'static str,
    pub repair_success: &'static str,
    /// Prefix put before the server's message on a failed repair
    pub repair_error_prefix: &'static str,
    pub communication_error: &'static str,
    pub user_position: &'static str,
    pub legend_title: &'static str,
    pub legend_toggle: &'static str,
    pub stats_total: &'static str,
    pub stats_critical: &'static str,
    pub stats_km: &'static str,
    /// strftime pattern matching the browser's `toLocaleDateString`
    pub date_pattern: &'static str,
}

static EN: LabelSet = LabelSet {
    status_ok: "OK",
    status_warning: "WARNING",
    status_critical: "CRITICAL",
    popup_status: "Status",
    popup_confidence: "Reliability",
    repair_button: "Mark as Repaired",
    confirm_repair: "Do you confirm that the repair has been made? The point will be removed from the map.",
    repair_success: "Intervention recorded successfully!!",
    repair_error_prefix: "Error: ",
    communication_error: "Error communicating with the server.",
    user_position: "You are here!",
    legend_title: "Legend",
    legend_toggle: "Legend",
    stats_total: "Total points",
    stats_critical: "Critical points",
    stats_km: "Km mapped",
    date_pattern: "%-m/%-d/%Y",
};

static IT: LabelSet = LabelSet {
    status_ok: "REGOLARE",
    status_warning: "ATTENZIONE",
    status_critical: "CRITICO",
    popup_status: "Stato",
    popup_confidence: "Affidabilità",
    repair_button: "Segna come riparato",
    confirm_repair: "Confermi che la riparazione è stata effettuata? Il punto verrà rimosso dalla mappa.",
    repair_success: "Intervento registrato con successo!",
    repair_error_prefix: "Errore: ",
    communication_error: "Errore di comunicazione con il server.",
    user_position: "Sei qui!",
    legend_title: "Legenda",
    legend_toggle: "Legenda",
    stats_total: "Punti totali",
    stats_critical: "Punti critici",
    stats_km: "Km mappati",
    date_pattern: "%-d/%-m/%Y",
};

impl Locale {
    pub fn labels(&self) -> &'static LabelSet {
        match self {
            Locale::En => &EN,
            Locale::It => &IT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
        }
    }
}

impl LabelSet {
    pub fn status(&self, status: RoadStatus) -> &'static str {
        match status {
            RoadStatus::Ok => self.status_ok,
            RoadStatus::Warning => self.status_warning,
            RoadStatus::Critical => self.status_critical,
        }
    }

    /// Message shown when the server refuses a repair.
    pub fn repair_error(&self, message: Option<&str>) -> String {
        format!("{}{}", self.repair_error_prefix, message.unwrap_or("unknown error"))
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "it" | "italian" | "italiano" => Ok(Locale::It),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
