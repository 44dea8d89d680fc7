//! Python bindings that expose the screening engine via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::screening::{self, Hit, Query, TargetRecord};
use crate::{BatchDriver, ScreenConfig, DEFAULT_MAX_DISTANCE};

/// Hit row in table column order.
type HitRow = (String, String, String, String, String, usize, usize, String, u32);

fn into_row(hit: Hit) -> HitRow {
    (
        hit.query_id,
        hit.query_sequence,
        hit.transcript_id,
        hit.gene_symbol,
        hit.transcript_type,
        hit.match_start,
        hit.match_end,
        hit.matched_sequence,
        hit.distance,
    )
}

/// Substitution-only distance; `-1` when lengths differ.
#[pyfunction]
pub fn distance(a: &str, b: &str) -> i32 {
    screening::substitution_distance(a.as_bytes(), b.as_bytes())
}

/// Parse a header into `(transcript_id, gene_symbol, transcript_type, full_header)`.
#[pyfunction]
pub fn parse_header(header: &str) -> (String, String, String, String) {
    let annotation = screening::parse_header(header);
    (
        annotation.transcript_id,
        annotation.gene_symbol,
        annotation.transcript_type,
        annotation.full_header,
    )
}

/// Scan every `(id, sequence)` query against every `(header, sequence)` target.
///
/// Args:
///     queries: List of `(aso_id, sequence)` tuples.
///     targets: List of `(header, sequence)` tuples.
///     max_distance: Maximum mismatches (default 2).
///     parallel: Spread pairs over all cores; output order is unchanged.
///
/// Returns:
///     List of hit tuples in hit table column order.
#[pyfunction]
#[pyo3(signature = (queries, targets, max_distance = DEFAULT_MAX_DISTANCE, parallel = false))]
pub fn scan_all(
    py: Python<'_>,
    queries: Vec<(String, String)>,
    targets: Vec<(String, String)>,
    max_distance: u32,
    parallel: bool,
) -> PyResult<Vec<HitRow>> {
    let queries: Vec<Query> = queries
        .into_iter()
        .map(|(id, sequence)| Query::new(id, sequence))
        .collect();
    let targets: Vec<TargetRecord> = targets
        .into_iter()
        .map(|(header, sequence)| TargetRecord::new(header, sequence))
        .collect();

    let mut config = ScreenConfig::default().with_max_distance(max_distance);
    if parallel {
        config = config.parallel();
    }
    let driver = BatchDriver::new(&config).map_err(|err| PyValueError::new_err(err.to_string()))?;
    let outcome = py
        .allow_threads(|| driver.run(&queries, &targets))
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

    Ok(outcome.hits.into_iter().map(into_row).collect())
}

/// Create Python module.
#[pymodule]
pub fn asoscreen_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(parse_header, m)?)?;
    m.add_function(wrap_pyfunction!(scan_all, m)?)?;
    Ok(())
}
