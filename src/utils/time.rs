//! Formatting helpers for elapsed hours and durations.

/// Format fractional hours with a fixed number of decimals, e.g. "2.00".
pub fn format_hours(hours: f64, precision: usize) -> String {
    format!("{:.*}", precision, hours)
}

/// Format fractional hours as "Hh MMm", e.g. 2.084 -> "2h 05m".
/// Used for the live status display where decimals read poorly.
pub fn format_duration_hm(hours: f64) -> String {
    let total_min = (hours.max(0.0) * 60.0).floor() as i64;
    format!("{}h {:02}m", total_min / 60, total_min % 60)
}
