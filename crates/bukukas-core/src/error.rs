use thiserror::Error;

/// Why a single raw row was rejected during normalization.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RowErrorKind {
    #[error("date could not be parsed as a calendar date")]
    InvalidDate,
    #[error("amount could not be parsed as a number")]
    InvalidAmount,
}

/// One rejected input row. `index` is the 0-based position of the row
/// in the batch handed to the normalizer, so callers can report
/// per-row failures without losing the valid remainder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("row {index}: {reason}")]
pub struct RowError {
    pub index: usize,
    pub reason: RowErrorKind,
}
