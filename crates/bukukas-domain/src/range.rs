//! Inclusive calendar-date ranges used by ledger queries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date range inclusive on both bounds. A single-day range
/// (`start == end`) is valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    InvalidRange,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::InvalidRange => f.write_str("range start must not be after range end"),
        }
    }
}

impl std::error::Error for DateRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn range_is_inclusive_on_both_bounds() {
        let range = DateRange::new(date(2024, 1, 10), date(2024, 1, 20)).expect("valid range");
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let day = date(2024, 2, 29);
        let range = DateRange::new(day, day).expect("single-day range");
        assert!(range.contains(day));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 1))
            .expect_err("inverted range should fail");
        assert_eq!(err, DateRangeError::InvalidRange);
    }
}
