//! Human-readable duration normalization.

use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Scale a duration to the largest unit it exceeds and format it.
///
/// Comparisons are strictly greater-than, so a duration of exactly one
/// unit falls through to the next smaller unit: exactly 1 hour prints as
/// `"60.00 minutes"`, exactly 1 second as `"1000 ms"`. Long-standing
/// behavior; callers depend on the exact strings.
///
/// The millisecond branch uses the default float display with no forced
/// decimals: `"500 ms"`, `"0.5 ms"`.
pub fn normalize_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();

    if duration > Duration::from_secs(SECS_PER_DAY) {
        format!("{:.2} days", secs / SECS_PER_DAY as f64)
    } else if duration > Duration::from_secs(SECS_PER_HOUR) {
        format!("{:.2} hours", secs / SECS_PER_HOUR as f64)
    } else if duration > Duration::from_secs(SECS_PER_MINUTE) {
        format!("{:.2} minutes", secs / SECS_PER_MINUTE as f64)
    } else if duration > Duration::from_secs(1) {
        format!("{secs:.2} seconds")
    } else {
        // Integer nanoseconds divided last keeps short values exact
        // (500ms -> 500.0, not 500.00000000000006).
        let millis = duration.as_nanos() as f64 / 1_000_000.0;
        format!("{millis} ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_displays_in_milliseconds() {
        assert_eq!(normalize_duration(Duration::from_millis(500)), "500 ms");
    }

    #[test]
    fn test_sub_millisecond_uses_default_float_display() {
        assert_eq!(normalize_duration(Duration::from_micros(500)), "0.5 ms");
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(normalize_duration(Duration::ZERO), "0 ms");
    }

    #[test]
    fn test_sub_minute_displays_in_seconds() {
        assert_eq!(normalize_duration(Duration::from_secs(20)), "20.00 seconds");
    }

    #[test]
    fn test_sub_hour_displays_in_minutes() {
        assert_eq!(
            normalize_duration(Duration::from_secs(30 * 60)),
            "30.00 minutes"
        );
    }

    #[test]
    fn test_sub_day_displays_in_hours() {
        assert_eq!(
            normalize_duration(Duration::from_secs(90 * 60)),
            "1.50 hours"
        );
    }

    #[test]
    fn test_multi_day_displays_in_days() {
        assert_eq!(
            normalize_duration(Duration::from_secs(9 * SECS_PER_DAY)),
            "9.00 days"
        );
    }

    // The unit ladder is strictly greater-than: an exact threshold prints
    // in the next smaller unit. Deliberately preserved.

    #[test]
    fn test_exactly_one_second_displays_in_milliseconds() {
        assert_eq!(normalize_duration(Duration::from_secs(1)), "1000 ms");
    }

    #[test]
    fn test_exactly_one_minute_displays_in_seconds() {
        assert_eq!(
            normalize_duration(Duration::from_secs(SECS_PER_MINUTE)),
            "60.00 seconds"
        );
    }

    #[test]
    fn test_exactly_one_hour_displays_in_minutes() {
        assert_eq!(
            normalize_duration(Duration::from_secs(SECS_PER_HOUR)),
            "60.00 minutes"
        );
    }

    #[test]
    fn test_exactly_one_day_displays_in_hours() {
        assert_eq!(
            normalize_duration(Duration::from_secs(SECS_PER_DAY)),
            "24.00 hours"
        );
    }

    #[test]
    fn test_just_over_one_day_displays_in_days() {
        assert_eq!(
            normalize_duration(Duration::from_secs(SECS_PER_DAY) + Duration::from_nanos(1)),
            "1.00 days"
        );
    }
}
