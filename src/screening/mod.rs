//! Off-target screening engine.
//!
//! Headers are annotated, gated by the functional-region policy, and then
//! scanned window by window with a substitution-only distance. The batch
//! driver runs the scanner over every query x target pair.

mod batch;
mod distance;
mod header;
mod region;
mod scanner;
mod summary;
mod types;

pub use batch::{scan_all, BatchDriver, InputProfile, ScanOutcome};
pub use distance::{is_valid_hit, substitution_distance, DEFAULT_MAX_DISTANCE, INCOMPARABLE};
pub use header::parse_header;
pub use region::{classify_region, is_functional, RegionMatch, RegionPolicy};
pub use scanner::{scan, WindowScanner};
pub use summary::{fingerprint, HitSummary};
pub use types::{Annotation, Hit, Query, TargetRecord, NA};
