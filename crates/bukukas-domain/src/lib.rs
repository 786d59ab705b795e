//! bukukas-domain
//!
//! Pure domain models for the ledger engine (records, date ranges,
//! aggregation buckets). No I/O, no parsing, no storage.

pub mod common;
pub mod range;
pub mod record;
pub mod summary;

pub use common::*;
pub use range::*;
pub use record::*;
pub use summary::*;
