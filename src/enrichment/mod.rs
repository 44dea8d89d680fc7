//! Optional advisory annotation of scanner hits.
//!
//! Runs strictly after the batch driver and never changes the hit list:
//! every hit comes back, with `NA` wherever no advisory could be produced.

mod api;
mod table;

pub use api::{
    enrich_hit, enrich_hits, AdvisoryRequest, EnrichedHit, Enricher, EnrichmentStats, WarnOnce,
    ALLELIC_STATUS, MAX_ADVISORY_CHARS,
};
pub use table::AdvisoryTable;

use thiserror::Error;

/// Errors reported by enrichment backends.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// Backend is not configured or not reachable.
    #[error("enrichment backend unavailable: {0}")]
    Unavailable(String),

    /// Backend returned an error for a request.
    #[error("enrichment backend error: {0}")]
    Backend(String),

    /// Failure reading backend data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed advisory table line.
    #[error("invalid advisory table at line {line}: expected 'GENE<TAB>ADVISORY'")]
    InvalidTable {
        /// 1-based line number.
        line: usize,
    },
}
