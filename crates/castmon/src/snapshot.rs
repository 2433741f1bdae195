//! Field extraction from the eureka_info JSON document.
//!
//! Extraction is deliberately lenient: the device firmware varies in which
//! keys it reports, so missing or mistyped keys fall back to their zero
//! value instead of failing the cycle. A partial response still renders.

use serde_json::Value;

/// RSSI assumed when the response carries no usable signal level. Deep
/// enough to classify as Poor.
pub const NO_SIGNAL_DBM: i64 = -100;

/// Parsed status for one poll cycle. Read-only after extraction and
/// discarded after rendering; nothing is carried across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub name: String,
    pub cast_build_revision: String,
    pub release_track: String,
    pub has_update: bool,
    /// Seconds since boot. The device reports fractional seconds.
    pub uptime_seconds: f64,
    pub ssid: String,
    pub bssid: String,
    /// Wi-Fi RSSI in dBm; closer to zero is stronger.
    pub signal_level: i64,
    pub noise_level: i64,
    pub ip_address: String,
    pub mac_address: String,
    pub ethernet_connected: bool,
    pub locale: String,
    /// Wire location: nested under `location.country_code`.
    pub country_code: String,
    pub version: String,
    pub timezone: String,
    /// Wire location: nested under `opt_in.crash` / `opt_in.stats`.
    pub opt_in_crash: bool,
    pub opt_in_stats: bool,
}

fn str_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Strings and bare numbers both render; some firmware reports `version`
/// as an integer.
fn scalar_field(doc: &Value, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn bool_field(doc: &Value, key: &str) -> bool {
    doc.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn int_field(doc: &Value, key: &str, default: i64) -> i64 {
    doc.get(key).and_then(Value::as_i64).unwrap_or(default)
}

impl StatusSnapshot {
    /// Extract the fixed field set. Total over any JSON value.
    pub fn from_json(doc: &Value) -> Self {
        let location = doc.get("location");
        let opt_in = doc.get("opt_in");

        Self {
            name: str_field(doc, "name"),
            cast_build_revision: scalar_field(doc, "cast_build_revision"),
            release_track: str_field(doc, "release_track"),
            has_update: bool_field(doc, "has_update"),
            uptime_seconds: doc
                .get("uptime")
                .and_then(Value::as_f64)
                .map(|u| u.max(0.0))
                .unwrap_or(0.0),
            ssid: str_field(doc, "ssid"),
            bssid: str_field(doc, "bssid"),
            signal_level: int_field(doc, "signal_level", NO_SIGNAL_DBM),
            noise_level: int_field(doc, "noise_level", 0),
            ip_address: str_field(doc, "ip_address"),
            mac_address: str_field(doc, "mac_address"),
            ethernet_connected: bool_field(doc, "ethernet_connected"),
            locale: str_field(doc, "locale"),
            country_code: location.map(|l| str_field(l, "country_code")).unwrap_or_default(),
            version: scalar_field(doc, "version"),
            timezone: str_field(doc, "timezone"),
            opt_in_crash: opt_in.map(|o| bool_field(o, "crash")).unwrap_or(false),
            opt_in_stats: opt_in.map(|o| bool_field(o, "stats")).unwrap_or(false),
        }
    }
}
