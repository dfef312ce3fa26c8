// src/dates.rs
use chrono::{DateTime, Local};

/// Timestamp in the ISO form the dashboard stores in its metadata blocks,
/// e.g. "2024-01-31T14:05:09.123456".
pub fn isoformat(dt: DateTime<Local>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Plain calendar date, "2024-01-31".
pub fn ymd(dt: DateTime<Local>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
