//! The canonical transaction record every other layer works with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ledger entry. Positive `amount` is an inflow (income), negative
/// an outflow (expense); zero is permitted and counts toward neither.
///
/// Records are immutable once appended to a ledger; corrections are
/// modeled as new records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    /// Open label set: "income"/"expense"-class tags are conventional,
    /// any free-form string passes through verbatim.
    pub category: String,
    /// Free-form, may be empty.
    pub description: String,
    pub amount: f64,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}
