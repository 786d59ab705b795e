//! Coercion of loosely-typed input rows into canonical records.
//!
//! Every bit of input leniency (date formats, amounts arriving as
//! strings) lives here; downstream code only ever sees
//! `TransactionRecord`.

use bukukas_domain::TransactionRecord;
use chrono::NaiveDate;

use crate::error::{RowError, RowErrorKind};

/// Date formats accepted on ingestion. Output is always canonical
/// `%Y-%m-%d`.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// A raw transaction row as delivered by an external source (CSV
/// upload, manual form entry). All fields are untrusted strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl RawRow {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Result of normalizing a batch: the valid records plus one error per
/// rejected row. Partial success is the contract: a malformed row
/// never sinks the batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOutcome {
    pub records: Vec<TransactionRecord>,
    pub errors: Vec<RowError>,
}

impl NormalizeOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Validates and coerces every row in the batch. Rows that fail
    /// date or amount parsing are reported in `errors` under their
    /// original 0-based index; all remaining rows are returned as
    /// fully-typed records in input order.
    pub fn normalize(rows: &[RawRow]) -> NormalizeOutcome {
        let mut outcome = NormalizeOutcome::default();
        for (index, row) in rows.iter().enumerate() {
            match Self::normalize_row(row) {
                Ok(record) => outcome.records.push(record),
                Err(reason) => {
                    tracing::warn!(index, %reason, "rejected ledger row");
                    outcome.errors.push(RowError { index, reason });
                }
            }
        }
        tracing::debug!(
            accepted = outcome.records.len(),
            rejected = outcome.errors.len(),
            "normalized batch"
        );
        outcome
    }

    fn normalize_row(row: &RawRow) -> Result<TransactionRecord, RowErrorKind> {
        let date = Self::parse_date(&row.date).ok_or(RowErrorKind::InvalidDate)?;
        let amount = Self::parse_amount(&row.amount).ok_or(RowErrorKind::InvalidAmount)?;
        Ok(TransactionRecord::new(
            date,
            row.category.clone(),
            row.description.clone(),
            amount,
        ))
    }

    /// Parses a calendar date, trying each accepted format in order.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    }

    /// Parses a signed amount. Non-finite values are rejected.
    pub fn parse_amount(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
    }
}
