//! Human-readable elapsed-time strings for note and activity displays.

use chrono::Utc;

use crate::types::Timestamp;

/// Render the time elapsed since `then` as a coarse human-readable string
/// ("just now", "5 minutes ago", "3 days ago", ...).
///
/// Future timestamps (clock skew) render as "just now".
pub fn elapsed_time_str(then: Timestamp) -> String {
    let secs = (Utc::now() - then).num_seconds();
    elapsed_from_secs(secs)
}

fn elapsed_from_secs(secs: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    if secs < MINUTE {
        return "just now".to_string();
    }
    let (count, unit) = if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < MONTH {
        (secs / DAY, "day")
    } else if secs < YEAR {
        (secs / MONTH, "month")
    } else {
        (secs / YEAR, "year")
    };
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
