//! bukukas-csv
//!
//! The tabular boundary of the ledger engine: ingestion of the
//! four-column transaction CSV (schema check, then row-wise
//! normalization with partial success) and the canonical export that
//! round-trips back through ingestion.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use bukukas_core::{sample_records, NormalizeOutcome, RawRow, RecordNormalizer};
use bukukas_domain::TransactionRecord;
use chrono::NaiveDate;
use thiserror::Error;

/// The required ingestion columns, matched case-sensitively against
/// the header. Extra columns are ignored; a missing one is fatal.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "category", "description", "amount"];

/// Canonical date form used on export.
const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum CsvError {
    /// The ingestion input is missing a required column. Fatal to the
    /// whole call: nothing is normalized, nothing reaches the ledger.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Knobs for the ingestion reader. Defaults match the canonical
/// export: comma-separated, header names trimmed before matching.
///
/// Data fields are never trimmed here. Whitespace in `category` and
/// `description` is significant and must survive an export/ingest
/// cycle unchanged; the normalizer already trims `date` and `amount`
/// where parsing needs it.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub delimiter: u8,
    /// Trim surrounding whitespace from header names before the
    /// required-column check.
    pub trim_headers: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim_headers: true,
        }
    }
}

/// Reads a transaction CSV. The header must contain every required
/// column (exact, case-sensitive names) or the call fails with
/// [`CsvError::MissingColumn`] before any row is touched. Rows then
/// flow through [`RecordNormalizer`], so one malformed row costs only
/// itself: the outcome carries the valid records plus a
/// [`bukukas_core::RowError`] per rejected row.
pub fn ingest_csv<R: Read>(reader: R, options: &IngestOptions) -> Result<NormalizeOutcome, CsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim_headers {
            csv::Trim::Headers
        } else {
            csv::Trim::None
        })
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header == name)
            .ok_or(CsvError::MissingColumn(name))?;
    }
    let [date_col, category_col, description_col, amount_col] = columns;

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let field = |col: usize| record.get(col).unwrap_or("").to_string();
        rows.push(RawRow {
            date: field(date_col),
            category: field(category_col),
            description: field(description_col),
            amount: field(amount_col),
        });
    }

    let outcome = RecordNormalizer::normalize(&rows);
    tracing::info!(
        rows = rows.len(),
        accepted = outcome.records.len(),
        rejected = outcome.errors.len(),
        "ingested transaction csv"
    );
    Ok(outcome)
}

pub fn ingest_csv_path(path: &Path, options: &IngestOptions) -> Result<NormalizeOutcome, CsvError> {
    let file = File::open(path)?;
    ingest_csv(file, options)
}

/// Writes records as the canonical four-column CSV, dates formatted
/// `YYYY-MM-DD`. Exporting and re-ingesting reproduces an equivalent
/// record set.
pub fn export_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<(), CsvError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REQUIRED_COLUMNS)?;
    for record in records {
        csv_writer.write_record([
            record.date.format(EXPORT_DATE_FORMAT).to_string(),
            record.category.clone(),
            record.description.clone(),
            record.amount.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv_path(records: &[TransactionRecord], path: &Path) -> Result<(), CsvError> {
    let file = File::create(path)?;
    export_csv(records, file)
}

/// Writes the downloadable starter template: the sample ledger
/// anchored at `today`, in canonical export form.
pub fn write_template_csv<W: Write>(writer: W, today: NaiveDate) -> Result<(), CsvError> {
    export_csv(&sample_records(today), writer)
}
