//! Calendar arithmetic over the insurer's logical clock
//!
//! The billing core never reads the wall clock. Every operation receives the
//! insurer's current time explicitly, as a naive local timestamp, and due
//! dates advance by whole calendar months.

use chrono::{Months, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the insurer's logical time line
pub type Timestamp = NaiveDateTime;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Adding {months} months to {timestamp} leaves the supported calendar range")]
    OutOfRange {
        timestamp: Timestamp,
        months: u32,
    },

    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange {
        start: Timestamp,
        end: Timestamp,
    },
}

/// Adds whole calendar months to a timestamp
///
/// Days that do not exist in the target month are clamped to its last day,
/// so 31 January plus one month is 28 (or 29) February.
///
/// # Errors
///
/// Returns `TemporalError::OutOfRange` if the result is not representable
pub fn add_months(timestamp: Timestamp, months: u32) -> Result<Timestamp, TemporalError> {
    timestamp
        .checked_add_months(Months::new(months))
        .ok_or(TemporalError::OutOfRange { timestamp, months })
}

/// Validates that `start <= end`
pub fn ensure_ordered(start: Timestamp, end: Timestamp) -> Result<(), TemporalError> {
    if start > end {
        return Err(TemporalError::InvalidRange { start, end });
    }
    Ok(())
}

/// The single logical clock owned by an insurer
///
/// The clock is only ever moved by its owner; billing and claim operations
/// read it for the duration of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalClock {
    now: Timestamp,
}

impl LogicalClock {
    /// Creates a clock reading `now`
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }

    /// Current reading
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Moves the clock to an arbitrary reading
    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }

    /// Moves the clock forward by whole calendar months
    pub fn advance_months(&mut self, months: u32) -> Result<Timestamp, TemporalError> {
        self.now = add_months(self.now, months)?;
        Ok(self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(at(2025, 1, 31), 1).unwrap(), at(2025, 2, 28));
        assert_eq!(add_months(at(2024, 1, 31), 1).unwrap(), at(2024, 2, 29));
    }

    #[test]
    fn test_add_months_crosses_year() {
        assert_eq!(add_months(at(2025, 11, 15), 3).unwrap(), at(2026, 2, 15));
    }

    #[test]
    fn test_add_months_overflow() {
        let result = add_months(NaiveDateTime::MAX, 1);
        assert!(matches!(result, Err(TemporalError::OutOfRange { .. })));
    }

    #[test]
    fn test_clock_advance() {
        let mut clock = LogicalClock::new(at(2025, 4, 15));
        clock.advance_months(12).unwrap();
        assert_eq!(clock.now(), at(2026, 4, 15));
    }
}
