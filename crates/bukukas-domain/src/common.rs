//! Shared calendar helpers.

use chrono::{Datelike, NaiveDate};

/// Truncates a date to the first day of its month. This is the bucket
/// key for monthly aggregation.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| next.pred_opt().unwrap_or(date))
        .unwrap_or(date)
}
