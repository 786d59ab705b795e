//! bukukas-core
//!
//! Business logic for the ledger engine: row normalization, the
//! append-only session store, and the aggregation services. Depends on
//! bukukas-domain. No CLI, no terminal I/O, no file formats.

pub mod error;
pub mod normalizer;
pub mod sample;
pub mod store;
pub mod summary;

pub use error::*;
pub use normalizer::*;
pub use sample::*;
pub use store::*;
pub use summary::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bukukas_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("bukukas tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
