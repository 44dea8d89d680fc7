//! Readers and writers for the formats around the screening engine.
//!
//! - query lists: `ASO_ID SEQUENCE` per line
//! - transcript FASTA
//! - hit tables (CSV), plain or enriched

mod fasta;
mod hits;
mod queries;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use fasta::{read_fasta, read_fasta_path};
pub use hits::{read_hits, render_hits, write_enriched_hits, write_hits, ENRICHED_COLUMNS, HIT_COLUMNS};
pub use queries::{read_queries, read_queries_path};

/// Nucleotides accepted in query sequences (case-insensitive).
pub const VALID_BASES: &[u8] = b"ATCGN";

/// Errors raised while reading screening inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failure while reading an already opened input.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// Query line without both an id and a sequence.
    #[error("invalid format at line {line}: expected 'ASO_ID SEQUENCE', got: {content}")]
    InvalidFormat {
        /// 1-based line number.
        line: usize,
        /// Offending line.
        content: String,
    },

    /// Query sequence with a base outside `ATCGN`.
    #[error("invalid nucleotide at line {line}: sequence for {id} contains non-ATCGN characters")]
    InvalidNucleotide {
        /// 1-based line number.
        line: usize,
        /// Query identifier on that line.
        id: String,
    },

    /// Input contained no records.
    #[error("no {kind} found")]
    NoRecords {
        /// Kind of record that was expected.
        kind: &'static str,
    },

    /// Malformed hit table.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub(crate) fn open_buffered(path: &Path) -> Result<BufReader<File>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
