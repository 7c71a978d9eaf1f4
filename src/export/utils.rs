// src/export/utils.rs
//! Formatting helpers shared by the exporters

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant as ISO-8601 UTC, e.g. `2025-03-01T09:00:00Z`.
/// Sub-second digits appear in groups of three only when non-zero.
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Date portion (first 10 characters) of [`format_instant`]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    format_instant(dt).chars().take(10).collect()
}

/// Fixed six-decimal rendering used for coordinates
pub fn format_coord(value: f64) -> String {
    format!("{:.6}", value)
}
