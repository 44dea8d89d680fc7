use std::collections::BTreeMap;

use super::types::Hit;

/// Per-run hit tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitSummary {
    /// Total number of hits.
    pub total: usize,
    /// Hits per transcript type, sorted by type.
    pub by_transcript_type: BTreeMap<String, usize>,
    /// Hits per mismatch count, ascending.
    pub by_distance: BTreeMap<u32, usize>,
}

impl HitSummary {
    /// Tally a hit list.
    pub fn from_hits(hits: &[Hit]) -> Self {
        let mut summary = Self {
            total: hits.len(),
            ..Self::default()
        };
        for hit in hits {
            *summary
                .by_transcript_type
                .entry(hit.transcript_type.clone())
                .or_insert(0) += 1;
            *summary.by_distance.entry(hit.distance).or_insert(0) += 1;
        }
        summary
    }
}

/// Digest of a hit sequence, sensitive to field values and order.
pub fn fingerprint(hits: &[Hit]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for hit in hits {
        let start = hit.match_start.to_string();
        let end = hit.match_end.to_string();
        let distance = hit.distance.to_string();
        let fields = [
            hit.query_id.as_str(),
            hit.query_sequence.as_str(),
            hit.transcript_id.as_str(),
            hit.gene_symbol.as_str(),
            hit.transcript_type.as_str(),
            start.as_str(),
            end.as_str(),
            hit.matched_sequence.as_str(),
            distance.as_str(),
        ];
        for field in fields {
            hasher.update(field.as_bytes());
            hasher.update(b"\t");
        }
        hasher.update(b"\n");
    }
    hasher.finalize()
}
