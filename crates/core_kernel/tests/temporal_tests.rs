//! Tests for calendar arithmetic and the logical clock

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::temporal::{add_months, ensure_ordered, LogicalClock, TemporalError};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

mod month_arithmetic {
    use super::*;

    #[test]
    fn test_each_billing_period_length() {
        let start = at(2025, 4, 15, 12);
        assert_eq!(add_months(start, 12).unwrap(), at(2026, 4, 15, 12));
        assert_eq!(add_months(start, 6).unwrap(), at(2025, 10, 15, 12));
        assert_eq!(add_months(start, 3).unwrap(), at(2025, 7, 15, 12));
        assert_eq!(add_months(start, 1).unwrap(), at(2025, 5, 15, 12));
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        assert_eq!(add_months(at(2025, 1, 10, 23), 1).unwrap(), at(2025, 2, 10, 23));
    }

    #[test]
    fn test_repeated_clamping_drifts() {
        let feb = add_months(at(2025, 1, 31, 0), 1).unwrap();
        let mar = add_months(feb, 1).unwrap();
        assert_eq!(mar, at(2025, 3, 28, 0));
    }

    #[test]
    fn test_zero_months_is_identity() {
        let start = at(2025, 4, 15, 12);
        assert_eq!(add_months(start, 0).unwrap(), start);
    }
}

mod ranges {
    use super::*;

    #[test]
    fn test_ordered_range() {
        assert!(ensure_ordered(at(2025, 1, 1, 0), at(2025, 1, 1, 0)).is_ok());
        assert!(matches!(
            ensure_ordered(at(2025, 2, 1, 0), at(2025, 1, 1, 0)),
            Err(TemporalError::InvalidRange { .. })
        ));
    }
}

mod clock {
    use super::*;

    #[test]
    fn test_set_moves_both_ways() {
        let mut clock = LogicalClock::new(at(2025, 4, 15, 12));
        clock.set(at(2024, 1, 1, 0));
        assert_eq!(clock.now(), at(2024, 1, 1, 0));
    }

    #[test]
    fn test_advance_months_returns_new_reading() {
        let mut clock = LogicalClock::new(at(2025, 4, 15, 12));
        let now = clock.advance_months(3).unwrap();
        assert_eq!(now, at(2025, 7, 15, 12));
        assert_eq!(clock.now(), now);
    }
}
