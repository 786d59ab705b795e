//! The append-only in-memory ledger for one session.

use bukukas_domain::{DateRange, DateRangeError, TransactionRecord};
use chrono::NaiveDate;

/// Owns every record ingested during the current session. Append-only:
/// stored records are never mutated, reordered, or removed, so a
/// record handed out by a query is exactly what was appended.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    records: Vec<TransactionRecord>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. O(1) amortized; existing records keep their
    /// positions.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Appends a batch, preserving the caller's order. Equivalent to
    /// repeated `append`.
    pub fn append_many(&mut self, records: impl IntoIterator<Item = TransactionRecord>) {
        self.records.extend(records);
    }

    /// Immutable view of every record in append order.
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Records sorted newest-first, the display-table order. The store
    /// itself stays in append order.
    pub fn all_by_date_desc(&self) -> Vec<TransactionRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest record dates, or `None` for an empty store.
    /// Display layers use this to seed date-filter defaults.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// Records with `start <= date <= end`, inclusive on both bounds,
    /// in append order. An empty match is `Ok(vec![])`; an inverted
    /// range fails before anything is scanned.
    pub fn filter_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, DateRangeError> {
        let range = DateRange::new(start, end)?;
        Ok(self
            .records
            .iter()
            .filter(|record| range.contains(record.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn record(y: i32, m: u32, d: u32, amount: f64) -> TransactionRecord {
        TransactionRecord::new(date(y, m, d), "income", "", amount)
    }

    #[test]
    fn append_preserves_order() {
        let mut store = LedgerStore::new();
        store.append(record(2024, 1, 20, 5.0));
        store.append_many(vec![record(2024, 1, 10, 1.0), record(2024, 1, 15, 2.0)]);
        let amounts: Vec<f64> = store.all().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![5.0, 1.0, 2.0]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn filter_is_inclusive_on_both_bounds() {
        let mut store = LedgerStore::new();
        store.append_many(vec![
            record(2024, 1, 10, 1.0),
            record(2024, 1, 15, 2.0),
            record(2024, 1, 20, 3.0),
            record(2024, 2, 1, 4.0),
        ]);
        let hits = store
            .filter_by_date_range(date(2024, 1, 10), date(2024, 1, 20))
            .expect("valid range");
        let amounts: Vec<f64> = hits.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn filter_with_no_matches_is_ok_and_empty() {
        let mut store = LedgerStore::new();
        store.append(record(2024, 1, 10, 1.0));
        let hits = store
            .filter_by_date_range(date(2025, 1, 1), date(2025, 12, 31))
            .expect("valid range");
        assert!(hits.is_empty());
    }

    #[test]
    fn inverted_range_fails_even_on_non_empty_store() {
        let mut store = LedgerStore::new();
        store.append(record(2024, 1, 10, 1.0));
        let err = store
            .filter_by_date_range(date(2024, 2, 1), date(2024, 1, 1))
            .expect_err("inverted range");
        assert_eq!(err, DateRangeError::InvalidRange);
    }

    #[test]
    fn date_span_reports_min_and_max() {
        let mut store = LedgerStore::new();
        assert_eq!(store.date_span(), None);
        store.append_many(vec![
            record(2024, 3, 5, 1.0),
            record(2024, 1, 2, 2.0),
            record(2024, 2, 20, 3.0),
        ]);
        assert_eq!(store.date_span(), Some((date(2024, 1, 2), date(2024, 3, 5))));
    }

    #[test]
    fn display_order_is_newest_first_without_mutating_store() {
        let mut store = LedgerStore::new();
        store.append_many(vec![
            record(2024, 1, 10, 1.0),
            record(2024, 3, 1, 2.0),
            record(2024, 2, 5, 3.0),
        ]);
        let sorted = store.all_by_date_desc();
        let dates: Vec<NaiveDate> = sorted.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 3, 1), date(2024, 2, 5), date(2024, 1, 10)]
        );
        // Append order untouched.
        assert_eq!(store.all()[0].date, date(2024, 1, 10));
    }
}
