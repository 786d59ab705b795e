//! Aggregation over explicit record sets: KPI totals, monthly series,
//! category rollups. Every function is pure and takes an explicit
//! record slice, so each is independently testable.

use std::collections::{BTreeMap, HashMap};

use bukukas_domain::{first_of_month, CategoryBucket, KpiSummary, MonthlyBucket, TransactionRecord};

pub struct AggregationEngine;

impl AggregationEngine {
    /// Headline totals. Income is the sum of positive amounts, expense
    /// the magnitude of the negative ones; zero-amount records count
    /// toward neither. Empty input yields the all-zero summary.
    pub fn compute_kpis(records: &[TransactionRecord]) -> KpiSummary {
        let total_income: f64 = records
            .iter()
            .filter(|r| r.amount > 0.0)
            .map(|r| r.amount)
            .sum();
        let total_expense: f64 = -records
            .iter()
            .filter(|r| r.amount < 0.0)
            .map(|r| r.amount)
            .sum::<f64>();
        KpiSummary {
            total_income,
            total_expense,
            net_profit: total_income - total_expense,
        }
    }

    /// Net signed sum per calendar month, ascending by month. Months
    /// with no records produce no bucket; gap-filling is a display
    /// concern.
    pub fn monthly_series(records: &[TransactionRecord]) -> Vec<MonthlyBucket> {
        let mut buckets: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
        for record in records {
            *buckets.entry(first_of_month(record.date)).or_default() += record.amount;
        }
        buckets
            .into_iter()
            .map(|(month, net_sum)| MonthlyBucket { month, net_sum })
            .collect()
    }

    /// Net signed sum per distinct category label present in the
    /// input. The category set is open, so this is a sparse rollup;
    /// bucket order is unspecified.
    pub fn category_totals(records: &[TransactionRecord]) -> Vec<CategoryBucket> {
        let mut buckets: HashMap<&str, f64> = HashMap::new();
        for record in records {
            *buckets.entry(record.category.as_str()).or_default() += record.amount;
        }
        buckets
            .into_iter()
            .map(|(category, net_sum)| CategoryBucket {
                category: category.to_string(),
                net_sum,
            })
            .collect()
    }
}
