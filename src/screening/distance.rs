//! Substitution-only (Hamming) distance between equal-length sequences.
//!
//! Insertions and deletions are never considered; sequences of different
//! length are incomparable and reported through [`INCOMPARABLE`].

/// Returned by [`substitution_distance`] when the operands differ in length.
pub const INCOMPARABLE: i32 = -1;

/// Default mismatch tolerance used throughout the pipeline.
pub const DEFAULT_MAX_DISTANCE: u32 = 2;

/// Count mismatching positions between two sequences, ignoring case.
///
/// Returns [`INCOMPARABLE`] when `a` and `b` have different lengths.
pub fn substitution_distance(a: &[u8], b: &[u8]) -> i32 {
    if a.len() != b.len() {
        return INCOMPARABLE;
    }

    a.iter()
        .zip(b)
        .filter(|(x, y)| !x.eq_ignore_ascii_case(y))
        .count() as i32
}

/// Whether a distance qualifies as a hit under `threshold`.
///
/// The [`INCOMPARABLE`] sentinel is always rejected.
pub fn is_valid_hit(distance: i32, threshold: u32) -> bool {
    distance >= 0 && (distance as u32) <= threshold
}
