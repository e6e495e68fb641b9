//! Publish gate: one build per day at a fixed local hour.
//!
//! The scheduler may invoke the job every hour. Only the run that lands in the
//! publishing hour (or one explicitly forced) may touch the site; every other
//! run is a successful no-op.

use chrono::{DateTime, TimeZone, Timelike};

/// Local hour (0-23) at which the site is rebuilt.
pub const PUBLISH_HOUR: u32 = 6;

/// Value of `FORCE_UPDATE` that bypasses the gate.
pub const FORCE_SENTINEL: &str = "1";

/// `true` if a run at `local_hour` may publish.
pub fn should_publish(local_hour: u32, force: bool) -> bool {
    force || local_hour == PUBLISH_HOUR
}

/// Convenience over [`should_publish`] for a zoned timestamp.
pub fn should_publish_at<Tz: TimeZone>(now: &DateTime<Tz>, force: bool) -> bool {
    should_publish(now.hour(), force)
}

/// Interpret the raw override value. Only the exact sentinel counts.
pub fn is_forced(raw: Option<&str>) -> bool {
    raw == Some(FORCE_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Los_Angeles;

    #[test]
    fn test_publishes_at_six() {
        assert!(should_publish(6, false));
    }

    #[test]
    fn test_skips_other_hours() {
        assert!(!should_publish(5, false));
        for hour in (0..24).filter(|h| *h != PUBLISH_HOUR) {
            assert!(!should_publish(hour, false), "hour {hour} should be gated");
        }
    }

    #[test]
    fn test_force_overrides_hour() {
        assert!(should_publish(5, true));
        assert!(should_publish(23, true));
    }

    #[test]
    fn test_zoned_timestamp_uses_local_hour() {
        let six_thirty = Los_Angeles.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();
        let seven = Los_Angeles.with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap();
        assert!(should_publish_at(&six_thirty, false));
        assert!(!should_publish_at(&seven, false));
    }

    #[test]
    fn test_only_exact_sentinel_forces() {
        assert!(is_forced(Some("1")));
        assert!(!is_forced(Some("true")));
        assert!(!is_forced(Some("0")));
        assert!(!is_forced(Some(" 1")));
        assert!(!is_forced(None));
    }
}
