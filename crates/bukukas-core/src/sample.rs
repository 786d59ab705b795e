//! Starter ledger used for templates and demos: twelve month-end rows
//! alternating sales income and operating expenses, anchored to a
//! caller-supplied date so output is deterministic in tests.

use bukukas_domain::{first_of_month, last_of_month, TransactionRecord};
use chrono::NaiveDate;

const SAMPLE_ROWS: [(&str, &str, f64); 12] = [
    ("income", "Product A sales", 1_500_000.0),
    ("income", "Product B sales", 1_200_000.0),
    ("expense", "Raw materials", -500_000.0),
    ("expense", "Transport", -200_000.0),
    ("income", "Product C sales", 1_800_000.0),
    ("expense", "Salaries", -700_000.0),
    ("income", "Product D sales", 1_600_000.0),
    ("expense", "Electricity", -150_000.0),
    ("income", "Product E sales", 1_400_000.0),
    ("expense", "Rent", -300_000.0),
    ("income", "Product F sales", 1_700_000.0),
    ("expense", "Promotion", -100_000.0),
];

/// Builds the sample ledger: one record on each of the twelve most
/// recent month-end dates not after `today`, oldest first.
pub fn sample_records(today: NaiveDate) -> Vec<TransactionRecord> {
    let mut month_ends = Vec::with_capacity(SAMPLE_ROWS.len());
    let mut cursor = last_of_month(today);
    if cursor > today {
        cursor = first_of_month(today).pred_opt().unwrap_or(cursor);
    }
    for _ in 0..SAMPLE_ROWS.len() {
        month_ends.push(cursor);
        cursor = first_of_month(cursor).pred_opt().unwrap_or(cursor);
    }
    month_ends.reverse();

    month_ends
        .into_iter()
        .zip(SAMPLE_ROWS)
        .map(|(date, (category, description, amount))| {
            TransactionRecord::new(date, category, description, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AggregationEngine;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn sample_covers_twelve_month_ends_oldest_first() {
        let records = sample_records(date(2024, 6, 15));
        assert_eq!(records.len(), 12);
        // June's month end is after the anchor, so May closes the run.
        assert_eq!(records.last().map(|r| r.date), Some(date(2024, 5, 31)));
        assert_eq!(records.first().map(|r| r.date), Some(date(2023, 6, 30)));
        assert!(records.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn anchor_on_month_end_includes_that_month() {
        let records = sample_records(date(2024, 6, 30));
        assert_eq!(records.last().map(|r| r.date), Some(date(2024, 6, 30)));
    }

    #[test]
    fn sample_ledger_is_profitable() {
        let records = sample_records(date(2024, 6, 15));
        let kpis = AggregationEngine::compute_kpis(&records);
        assert!(kpis.total_income > 0.0);
        assert!(kpis.total_expense > 0.0);
        assert!(kpis.net_profit > 0.0);
    }
}
