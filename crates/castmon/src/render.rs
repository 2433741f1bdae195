//! Dashboard text assembly.
//!
//! Pure string building: the rendered report is returned as a `String` and
//! the runtime owns the screen clear and the actual printing, so layout is
//! testable without a terminal.

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

use crate::snapshot::StatusSnapshot;
use crate::view::{DerivedView, UpdateTier, WifiTier};

/// Label column width, colon included.
const LABEL_WIDTH: usize = 18;

const TITLE: &str = " Cast Speaker Status ";

const LEGEND: &str = "Green = good | Yellow = meh | Red = bad/needs attention";

/// Semantic value colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Neutral,
    Good,
    Warn,
    Bad,
}

impl From<WifiTier> for Tone {
    fn from(tier: WifiTier) -> Self {
        match tier {
            WifiTier::Excellent => Tone::Good,
            WifiTier::Fair => Tone::Warn,
            WifiTier::Poor => Tone::Bad,
        }
    }
}

impl From<UpdateTier> for Tone {
    fn from(tier: UpdateTier) -> Self {
        match tier {
            UpdateTier::Pending => Tone::Warn,
            UpdateTier::NotPending => Tone::Neutral,
        }
    }
}

fn paint(value: &str, tone: Tone, color: bool) -> String {
    if !color {
        return value.to_string();
    }
    match tone {
        Tone::Neutral => value.to_string(),
        Tone::Good => value.bright_green().to_string(),
        Tone::Warn => value.yellow().to_string(),
        Tone::Bad => value.bright_red().to_string(),
    }
}

fn push_line(out: &mut String, color: bool, label: &str, value: &str, tone: Tone) {
    let pad = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    let pad = if color { pad.cyan().to_string() } else { pad };
    out.push_str(&pad);
    out.push(' ');
    out.push_str(&paint(value, tone, color));
    out.push('\n');
}

fn push_header(out: &mut String, width: usize, color: bool) {
    let bar = format!("{:<width$}", TITLE, width = width.max(TITLE.len()));
    if color {
        out.push_str(&bar.white().on_magenta().bold().to_string());
    } else {
        out.push_str(&bar);
    }
    out.push('\n');
    out.push('\n');
}

/// Render the full report for one cycle. `now` is injected so repeated
/// renders of the same snapshot are byte-identical in tests.
pub fn render_dashboard(
    snapshot: &StatusSnapshot,
    view: &DerivedView,
    now: DateTime<Local>,
    width: usize,
    color: bool,
) -> String {
    let mut out = String::new();
    push_header(&mut out, width, color);

    // Device and firmware state
    push_line(
        &mut out,
        color,
        "Timestamp",
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
        Tone::Neutral,
    );
    push_line(&mut out, color, "Name", &snapshot.name, Tone::Good);
    push_line(&mut out, color, "Build Rev", &snapshot.cast_build_revision, Tone::Neutral);
    push_line(&mut out, color, "Track", &snapshot.release_track, Tone::Neutral);
    push_line(
        &mut out,
        color,
        "Update Pending",
        &snapshot.has_update.to_string(),
        Tone::from(view.update_tier),
    );
    push_line(&mut out, color, "Uptime", &view.uptime_formatted, Tone::Neutral);
    push_line(
        &mut out,
        color,
        "Boot (UTC)",
        &view.boot_time_utc.format("%Y-%m-%d %H:%M:%S").to_string(),
        Tone::Neutral,
    );
    out.push('\n');

    // Network
    push_line(&mut out, color, "SSID", &snapshot.ssid, Tone::Neutral);
    push_line(&mut out, color, "BSSID", &snapshot.bssid, Tone::Neutral);
    push_line(
        &mut out,
        color,
        "Wi-Fi RSSI",
        &format!("{} dBm", snapshot.signal_level),
        Tone::from(view.wifi_tier),
    );
    push_line(
        &mut out,
        color,
        "Noise Floor",
        &format!("{} dBm", snapshot.noise_level),
        Tone::Neutral,
    );
    push_line(&mut out, color, "IP", &snapshot.ip_address, Tone::Neutral);
    push_line(&mut out, color, "MAC", &snapshot.mac_address, Tone::Neutral);
    push_line(
        &mut out,
        color,
        "Ethernet",
        &snapshot.ethernet_connected.to_string(),
        Tone::Neutral,
    );
    out.push('\n');

    // Locale and opt-in
    push_line(&mut out, color, "Locale", &snapshot.locale, Tone::Neutral);
    push_line(&mut out, color, "Country", &snapshot.country_code, Tone::Neutral);
    push_line(&mut out, color, "Firmware Ver", &snapshot.version, Tone::Neutral);
    push_line(&mut out, color, "Time-Zone", &snapshot.timezone, Tone::Neutral);
    push_line(
        &mut out,
        color,
        "Opt-In Crash",
        &snapshot.opt_in_crash.to_string(),
        Tone::Neutral,
    );
    push_line(
        &mut out,
        color,
        "Opt-In Stats",
        &snapshot.opt_in_stats.to_string(),
        Tone::Neutral,
    );
    out.push('\n');

    if color {
        out.push_str(&LEGEND.cyan().to_string());
    } else {
        out.push_str(LEGEND);
    }
    out.push('\n');
    out
}

/// Single red status line for a failed poll.
pub fn render_fetch_error(message: &str, color: bool) -> String {
    let line = format!("[ERROR] {}", message);
    if color {
        line.bright_red().to_string()
    } else {
        line
    }
}

/// Render from a single clock reading: the timestamp line and the boot
/// time derive from the same instant.
pub fn render_at(snapshot: &StatusSnapshot, now: DateTime<Utc>, width: usize, color: bool) -> String {
    let view = DerivedView::compute(snapshot, now);
    render_dashboard(snapshot, &view, now.with_timezone(&Local), width, color)
}

/// Convenience for callers that render from a fresh clock reading.
pub fn render_now(snapshot: &StatusSnapshot, width: usize, color: bool) -> String {
    render_at(snapshot, Utc::now(), width, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn canned_snapshot() -> StatusSnapshot {
        StatusSnapshot::from_json(&json!({
            "name": "Living Room",
            "cast_build_revision": "1.56.281627",
            "release_track": "stable-channel",
            "has_update": false,
            "uptime": 3600,
            "ssid": "HomeNet",
            "bssid": "aa:bb:cc:dd:ee:ff",
            "signal_level": -50,
            "noise_level": -92,
            "ip_address": "192.168.8.110",
            "mac_address": "11:22:33:44:55:66",
            "ethernet_connected": false,
            "locale": "en-US",
            "location": { "country_code": "US" },
            "version": 55,
            "timezone": "Europe/Oslo",
            "opt_in": { "crash": true, "stats": false }
        }))
    }

    fn fixed_clocks() -> (DateTime<Utc>, DateTime<Local>) {
        let utc = Utc.with_ymd_and_hms(2025, 5, 19, 12, 0, 0).unwrap();
        (utc, utc.with_timezone(&Local))
    }

    #[test]
    fn test_end_to_end_plain_render() {
        let snapshot = canned_snapshot();
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let text = render_dashboard(&snapshot, &view, local, 80, false);

        assert!(text.contains("Name:"));
        assert!(text.contains("Living Room"));
        assert!(text.contains("00.01:00:00"));
        assert!(text.contains("-50 dBm"));
        assert!(text.contains("Update Pending:"));
        assert!(text.contains("2025-05-19 11:00:00")); // boot = noon minus 1h
        assert!(text.contains(LEGEND));
        // Plain mode carries no escape sequences at all
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_excellent_signal_renders_green() {
        let snapshot = canned_snapshot();
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let text = render_dashboard(&snapshot, &view, local, 80, true);
        // bright green foreground around the RSSI value
        assert!(text.contains("\u{1b}[92m-50 dBm"));
    }

    #[test]
    fn test_pending_update_renders_yellow() {
        let mut snapshot = canned_snapshot();
        snapshot.has_update = true;
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let text = render_dashboard(&snapshot, &view, local, 80, true);
        assert!(text.contains("\u{1b}[33mtrue"));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_clock() {
        let snapshot = canned_snapshot();
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let first = render_dashboard(&snapshot, &view, local, 80, false);
        let second = render_dashboard(&snapshot, &view, local, 80, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_labels_align_to_fixed_column() {
        let snapshot = canned_snapshot();
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let text = render_dashboard(&snapshot, &view, local, 80, false);
        for line in text.lines().skip(2).filter(|l| l.contains(':')) {
            if line == LEGEND {
                continue;
            }
            // value starts one space after the padded label column
            assert!(line.len() > LABEL_WIDTH, "short line: {:?}", line);
            assert_eq!(line.as_bytes()[LABEL_WIDTH], b' ', "misaligned: {:?}", line);
        }
    }

    #[test]
    fn test_render_at_uses_one_instant_for_timestamp_and_boot() {
        let snapshot = canned_snapshot(); // uptime 3600
        let (utc, _) = fixed_clocks();
        let text = render_at(&snapshot, utc, 80, false);

        let local_stamp = utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert!(text.contains(&local_stamp));
        assert!(text.contains("2025-05-19 11:00:00")); // boot = same instant minus 1h
    }

    #[test]
    fn test_error_line_is_single_line() {
        let plain = render_fetch_error("connection refused", false);
        assert_eq!(plain, "[ERROR] connection refused");
        assert_eq!(plain.lines().count(), 1);

        let colored = render_fetch_error("connection refused", true);
        assert!(colored.contains("\u{1b}[91m"));
        assert_eq!(colored.lines().count(), 1);
    }

    #[test]
    fn test_header_spans_requested_width() {
        let snapshot = canned_snapshot();
        let (utc, local) = fixed_clocks();
        let view = DerivedView::compute(&snapshot, utc);
        let text = render_dashboard(&snapshot, &view, local, 120, false);
        let header = text.lines().next().unwrap();
        assert_eq!(header.len(), 120);
        assert!(header.starts_with(TITLE));
    }
}
