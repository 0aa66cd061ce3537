//! Utility functions

use chrono::{Local, TimeZone};
use std::path::PathBuf;

/// Get the app data directory (logs, settings).
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Quake Finder")
}

/// Format an epoch-milliseconds event time as a local timestamp,
/// returning "N/A" when the value is outside the representable range.
pub fn format_event_time(time_ms: i64) -> String {
    match Local.timestamp_millis_opt(time_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => "N/A".to_string(),
    }
}

/// Format a depth value in kilometers with one decimal of precision.
pub fn format_depth(depth_km: f64) -> String {
    format!("{:.1} km", depth_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_time_renders_locally() {
        // 2023-11-14T22:13:20Z; stays in 2023 for any real UTC offset
        let formatted = format_event_time(1_700_000_000_000);
        assert!(formatted.contains("2023"), "got {formatted}");
        assert_ne!(formatted, "N/A");
    }

    #[test]
    fn out_of_range_time_is_na() {
        assert_eq!(format_event_time(i64::MAX), "N/A");
    }

    #[test]
    fn depth_keeps_one_decimal() {
        assert_eq!(format_depth(12.3), "12.3 km");
        assert_eq!(format_depth(0.0), "0.0 km");
        assert_eq!(format_depth(12.34), "12.3 km");
    }
}
