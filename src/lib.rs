//! # Antisense oligonucleotide off-target screening
//!
//! Screens ASO candidates against a transcript database by sliding each
//! query across every transcript and reporting windows within a small
//! number of substitutions. Insertions and deletions are not considered.
//!
//! ## Pipeline
//!
//! 1. **Annotation**: transcript headers are parsed into id, gene symbol
//!    and transcript type ([`screening::parse_header`])
//! 2. **Region gate**: the transcript type decides whether a record is
//!    scanned ([`screening::RegionPolicy`])
//! 3. **Window scan**: every offset is compared with a Hamming distance
//!    ([`screening::WindowScanner`])
//! 4. **Batch**: all queries x all targets, in deterministic order
//!    ([`screening::BatchDriver`])
//!
//! ## Usage Example
//!
//! ```
//! use asoscreen::screening::{scan_all, Query, TargetRecord};
//!
//! let queries = vec![Query::new("ASO_001", "ATCGATCG")];
//! let targets = vec![TargetRecord::new("GENE1|exon", "GGATCGATCGTT")];
//! let hits = scan_all(&queries, &targets, 0);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].match_start, 2);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod enrichment; // Optional advisory annotation of hits
pub mod io;         // Query, FASTA and hit table readers/writers
pub mod screening;  // Distance, annotation, region gate, scanner, batch driver
/// Python bindings for exposing the screening engine to Python pipelines.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use screening::{
    scan, scan_all, substitution_distance, BatchDriver, Hit, Query, RegionPolicy, ScanOutcome,
    TargetRecord, DEFAULT_MAX_DISTANCE,
};

use thiserror::Error;

/// How the batch driver distributes query x target pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Single thread, pairs in input order.
    #[default]
    Sequential,
    /// Pairs spread over a rayon pool; output order matches `Sequential`.
    Parallel,
}

/// Configuration parameters for a screening run
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Maximum mismatches for a window to be reported.
    pub max_distance: u32,

    /// Which annotated records are scanned.
    pub region_policy: RegionPolicy,

    /// Sequential or parallel batch execution.
    pub mode: ScanMode,

    /// Worker threads for parallel mode (`None` uses the global pool).
    pub threads: Option<usize>,

    /// Targets longer than this trigger a slow-scan warning.
    pub long_target_bp: usize,

    /// Pair count above which the comparison total is logged.
    pub pair_note_threshold: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            region_policy: RegionPolicy::AlwaysScan,
            mode: ScanMode::Sequential,
            threads: None,
            long_target_bp: 100_000,
            pair_note_threshold: 1_000_000,
        }
    }
}

impl ScreenConfig {
    /// Set the mismatch tolerance.
    pub fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the region policy.
    pub fn with_region_policy(mut self, policy: RegionPolicy) -> Self {
        self.region_policy = policy;
        self
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use parallel execution.
    pub fn parallel(self) -> Self {
        self.with_mode(ScanMode::Parallel)
    }

    /// Fix the number of worker threads for parallel mode.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<(), ScreenError> {
        if self.threads == Some(0) {
            return Err(ScreenError::InvalidConfiguration(
                "thread count must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur while setting up a screening run
#[derive(Error, Debug)]
pub enum ScreenError {
    /// Invalid run configuration
    #[error("Invalid screening configuration: {0}")]
    InvalidConfiguration(String),

    /// Worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
