//! Values derived from a snapshot at render time.
//!
//! Everything here is pure arithmetic over the snapshot and the clock
//! passed in, so it is testable without capturing terminal output.

use chrono::{DateTime, Duration, Utc};

use crate::snapshot::StatusSnapshot;

/// Wi-Fi signal quality bucket, from RSSI in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiTier {
    Excellent,
    Fair,
    Poor,
}

impl WifiTier {
    /// Boundaries are inclusive toward zero: -55 is Excellent, -65 is Fair.
    pub fn classify(rssi_dbm: i64) -> Self {
        if rssi_dbm >= -55 {
            WifiTier::Excellent
        } else if rssi_dbm >= -65 {
            WifiTier::Fair
        } else {
            WifiTier::Poor
        }
    }
}

/// Whether the device is waiting on a firmware update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTier {
    Pending,
    NotPending,
}

impl UpdateTier {
    pub fn from_flag(has_update: bool) -> Self {
        if has_update {
            UpdateTier::Pending
        } else {
            UpdateTier::NotPending
        }
    }
}

/// Computed per cycle from (snapshot, wall clock); never cached.
#[derive(Debug, Clone)]
pub struct DerivedView {
    pub boot_time_utc: DateTime<Utc>,
    pub uptime_formatted: String,
    pub wifi_tier: WifiTier,
    pub update_tier: UpdateTier,
}

impl DerivedView {
    pub fn compute(snapshot: &StatusSnapshot, now: DateTime<Utc>) -> Self {
        let uptime_secs = snapshot.uptime_seconds.floor() as i64;
        // Saturate rather than overflow: an absurd uptime still renders.
        let uptime = Duration::try_seconds(uptime_secs).unwrap_or(Duration::MAX);
        Self {
            boot_time_utc: now
                .checked_sub_signed(uptime)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            uptime_formatted: format_uptime(uptime_secs as u64),
            wifi_tier: WifiTier::classify(snapshot.signal_level),
            update_tier: UpdateTier::from_flag(snapshot.has_update),
        }
    }
}

/// `DD.HH:MM:SS`, every field zero-padded to two digits.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}.{:02}:{:02}:{:02}", days, hours, minutes, seconds)
}
