//! Validated creation-date filter window.

use chrono::NaiveDate;
use thiserror::Error;

/// Widest window the order endpoint will accept, in calendar days.
pub const MAX_RANGE_DAYS: i64 = 30;

/// Reasons a requested date window is rejected.
///
/// Validation runs before any network call - a rejected window never
/// produces a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRangeError {
    /// One or both dates were not supplied.
    #[error("both start and end dates are required")]
    Empty,

    /// Start date comes after the end date.
    #[error("start date must not be after end date")]
    Inverted,

    /// End date is after today.
    #[error("end date must not be in the future")]
    InFuture,

    /// Window spans more than [`MAX_RANGE_DAYS`] calendar days.
    #[error("date range must not exceed {MAX_RANGE_DAYS} days")]
    TooLarge,
}

/// An inclusive creation-date window, already validated.
///
/// The invariants `start <= end <= today` and
/// `end - start <= MAX_RANGE_DAYS` hold for every constructed value, so
/// downstream code can build query parameters without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validate and build a date window.
    ///
    /// Checks run in order: presence, inversion, future end date, span. The
    /// span check uses calendar-day difference, so a window from the 1st to
    /// the 31st of a 31-day month (30 days apart) is accepted while the 1st
    /// to the 1st of the next month (31 days apart) is not.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`DateRangeError`] check.
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, DateRangeError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(DateRangeError::Empty);
        };
        if start > end {
            return Err(DateRangeError::Inverted);
        }
        if end > today {
            return Err(DateRangeError::InFuture);
        }
        if (end - start).num_days() > MAX_RANGE_DAYS {
            return Err(DateRangeError::TooLarge);
        }
        Ok(Self { start, end })
    }

    /// First day of the window (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    #[test]
    fn test_max_range_is_reexported_at_crate_root() {
        assert_eq!(crate::MAX_RANGE_DAYS, MAX_RANGE_DAYS);
        assert_eq!(crate::MAX_RANGE_DAYS, 30);
    }

    #[test]
    fn test_missing_dates_rejected() {
        let today = date("2024-03-15");
        assert_eq!(
            DateRange::new(None, Some(today), today),
            Err(DateRangeError::Empty)
        );
        assert_eq!(
            DateRange::new(Some(today), None, today),
            Err(DateRangeError::Empty)
        );
        assert_eq!(DateRange::new(None, None, today), Err(DateRangeError::Empty));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRange::new(
            Some(date("2024-03-10")),
            Some(date("2024-03-01")),
            date("2024-03-15"),
        );
        assert_eq!(result, Err(DateRangeError::Inverted));
    }

    #[test]
    fn test_future_end_rejected() {
        // The future check fires before the span check.
        let result = DateRange::new(
            Some(date("2024-01-01")),
            Some(date("2024-02-15")),
            date("2024-02-01"),
        );
        assert_eq!(result, Err(DateRangeError::InFuture));
    }

    #[test]
    fn test_31_day_span_rejected() {
        let result = DateRange::new(
            Some(date("2024-03-01")),
            Some(date("2024-04-01")),
            date("2024-04-15"),
        );
        assert_eq!(result, Err(DateRangeError::TooLarge));
    }

    #[test]
    fn test_30_day_span_accepted() {
        let range = DateRange::new(
            Some(date("2024-03-01")),
            Some(date("2024-03-31")),
            date("2024-04-15"),
        )
        .expect("30-day span is within the limit");
        assert_eq!(range.start(), date("2024-03-01"));
        assert_eq!(range.end(), date("2024-03-31"));
    }

    #[test]
    fn test_single_day_accepted() {
        let today = date("2024-03-15");
        let range = DateRange::new(Some(today), Some(today), today)
            .expect("today..today is a valid window");
        assert_eq!(range.start(), range.end());
    }
}
