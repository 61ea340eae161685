//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for reading times and history points.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Convert an epoch-milliseconds value into a [`Timestamp`].
///
/// Returns `None` for values outside the representable range.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

/// Format a reading timestamp for display: `06 Aug 2026, 02:30:15 pm`.
///
/// Presentation detail, not a wire contract. 12-hour clock with a
/// lowercase am/pm marker.
#[must_use]
pub fn format_reading_time(ts: Timestamp) -> String {
    ts.format("%d %b %Y, %I:%M:%S %P").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_convert_epoch_millis() {
        let ts = from_epoch_millis(1_700_000_000_000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn should_reject_out_of_range_epoch_millis() {
        assert!(from_epoch_millis(i64::MAX).is_none());
    }

    #[test]
    fn should_format_reading_time_with_twelve_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 15).unwrap();
        assert_eq!(format_reading_time(ts), "06 Aug 2026, 02:30:15 pm");
    }

    #[test]
    fn should_format_morning_reading_time_with_am_marker() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 9, 5, 0).unwrap();
        assert_eq!(format_reading_time(ts), "06 Aug 2026, 09:05:00 am");
    }
}
