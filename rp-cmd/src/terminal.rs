//! A `Frontend` that prints the map to a terminal.
//!
//! Markers become one line each, the stats panel a single summary line,
//! and confirmations read `y`/`n` from stdin unless `--yes` was given.

use log::warn;
use rp_client::{Frontend, TileLayerConfig};
use rp_core::{LatLon, MapView};
use rp_render::{Locale, Marker, Palette, StatsFields};
use std::cell::RefCell;
use std::io::{BufRead, Write};

pub struct TerminalFrontend {
    locale: Locale,
    palette: Palette,
    assume_yes: bool,
    out: RefCell<Box<dyn Write>>,
    input: RefCell<Box<dyn BufRead>>,
}

impl TerminalFrontend {
    pub fn new(
        locale: Locale,
        palette: Palette,
        assume_yes: bool,
        out: Box<dyn Write>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            locale,
            palette,
            assume_yes,
            out: RefCell::new(out),
            input: RefCell::new(input),
        }
    }

    pub fn stdio(locale: Locale, palette: Palette, assume_yes: bool) -> Self {
        Self::new(
            locale,
            palette,
            assume_yes,
            Box::new(std::io::stdout()),
            Box::new(std::io::BufReader::new(std::io::stdin())),
        )
    }

    fn line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!("terminal write failed: {e}");
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sì")
}

impl Frontend for TerminalFrontend {
    fn show_map(&self, view: &MapView, tiles: &TileLayerConfig) {
        self.line(&format!(
            "Map centered at {:.4}, {:.4} (zoom {}) | {}",
            view.center.lat, view.center.lon, view.zoom, tiles.attribution
        ));
    }

    fn set_view(&self, view: &MapView) {
        self.line(&format!(
            "View moved to {:.4}, {:.4} (zoom {})",
            view.center.lat, view.center.lon, view.zoom
        ));
    }

    fn add_user_marker(&self, at: LatLon, label: &str) {
        self.line(&format!("* {label} ({:.5}, {:.5})", at.lat, at.lon));
    }

    fn clear_points(&self) {
        self.line(&format!("--- {} ---", chrono::Local::now().format("%H:%M:%S")));
    }

    fn draw_point(&self, marker: &Marker) {
        let popup = marker.popup.text().replace('\n', " | ");
        self.line(&format!(
            "[{:<6}] #{} ({:.5}, {:.5}) {}",
            marker.color, marker.id, marker.lat, marker.lon, popup
        ));
    }

    fn show_stats(&self, fields: &StatsFields) {
        let labels = self.locale.labels();
        self.line(&format!(
            "{}: {} | {}: {} | {}: {}",
            labels.stats_total,
            fields.total_points,
            labels.stats_critical,
            fields.red_count,
            labels.stats_km,
            fields.km_mapped
        ));
    }

    fn set_legend_visible(&self, visible: bool) {
        if !visible {
            return;
        }
        let labels = self.locale.labels();
        let entries: Vec<String> = rp_core::RoadStatus::ALL
            .iter()
            .map(|s| format!("{}={}", self.palette.color(*s), labels.status(*s)))
            .collect();
        self.line(&format!("{}: {}", labels.legend_title, entries.join(", ")));
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        {
            let mut out = self.out.borrow_mut();
            let _ = write!(out, "{message} [y/N] ");
            let _ = out.flush();
        }
        let mut answer = String::new();
        match self.input.borrow_mut().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("could not read confirmation: {e}");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        self.line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Writer whose contents stay readable after being boxed.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn frontend(assume_yes: bool, input: &str) -> (TerminalFrontend, SharedBuf) {
        let buf = SharedBuf::default();
        let frontend = TerminalFrontend::new(
            Locale::En,
            Palette::default(),
            assume_yes,
            Box::new(buf.clone()),
            Box::new(Cursor::new(input.to_string().into_bytes())),
        );
        (frontend, buf)
    }

    #[test]
    fn test_confirm_reads_answer() {
        let (f, buf) = frontend(false, "y\n");
        assert!(f.confirm("Sure?"));
        assert!(buf.text().contains("Sure? [y/N]"));

        let (f, _) = frontend(false, "\n");
        assert!(!f.confirm("Sure?"));

        let (f, _) = frontend(false, "");
        assert!(!f.confirm("Sure?"));
    }

    #[test]
    fn test_confirm_assume_yes() {
        let (f, buf) = frontend(true, "");
        assert!(f.confirm("Sure?"));
        assert!(buf.text().is_empty());
    }

    #[test]
    fn test_stats_line() {
        let (f, buf) = frontend(false, "");
        f.show_stats(&StatsFields {
            total_points: "12".into(),
            red_count: "3".into(),
            km_mapped: "4.5 km".into(),
        });
        let text = buf.text();
        assert!(text.contains("12"));
        assert!(text.contains("4.5 km"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_legend_only_when_visible() {
        let (f, buf) = frontend(false, "");
        f.set_legend_visible(false);
        assert!(buf.text().is_empty());
        f.set_legend_visible(true);
        assert!(buf.text().contains("red=CRITICAL"));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("Yes\n"));
        assert!(is_yes("si"));
        assert!(!is_yes("nope"));
    }
}
