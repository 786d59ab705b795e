//! Derived aggregation outputs: KPI totals and time/category buckets.
//!
//! These are computed views over a record set, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline totals for a record set.
///
/// `total_income` and `total_expense` are both non-negative
/// magnitudes; `net_profit` is their difference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct KpiSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_profit: f64,
}

/// Net signed sum of every record falling in one calendar month.
/// `month` is the first day of that month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBucket {
    pub month: NaiveDate,
    pub net_sum: f64,
}

/// Net signed sum of every record carrying one category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBucket {
    pub category: String,
    pub net_sum: f64,
}
