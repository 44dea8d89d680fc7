use tracing::trace;

use super::distance::{is_valid_hit, substitution_distance, DEFAULT_MAX_DISTANCE};
use super::header::parse_header;
use super::region::{classify_region, RegionMatch, RegionPolicy};
use super::types::{Annotation, Hit};

/// Sliding-window near-match search over a single target sequence.
#[derive(Debug, Clone, Copy)]
pub struct WindowScanner {
    max_distance: u32,
    policy: RegionPolicy,
}

impl Default for WindowScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl WindowScanner {
    /// Scanner accepting windows with at most `max_distance` mismatches.
    pub fn new(max_distance: u32) -> Self {
        Self {
            max_distance,
            policy: RegionPolicy::default(),
        }
    }

    /// Replace the region policy used to gate targets.
    pub fn with_policy(mut self, policy: RegionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Mismatch tolerance.
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// Region policy applied before scanning.
    pub fn policy(&self) -> RegionPolicy {
        self.policy
    }

    /// Annotate `target_header` and scan `target_sequence` for `query_sequence`.
    pub fn scan(
        &self,
        query_id: &str,
        query_sequence: &str,
        target_header: &str,
        target_sequence: &str,
    ) -> Vec<Hit> {
        let annotation = parse_header(target_header);
        self.scan_annotated(query_id, query_sequence, &annotation, target_sequence)
    }

    /// Scan a target whose header has already been annotated.
    ///
    /// Every window of query length is compared in ascending order of
    /// offset; overlapping hits are all kept.
    pub fn scan_annotated(
        &self,
        query_id: &str,
        query_sequence: &str,
        annotation: &Annotation,
        target_sequence: &str,
    ) -> Vec<Hit> {
        if !self.policy.admits(&annotation.transcript_type) {
            return Vec::new();
        }
        if classify_region(&annotation.transcript_type) == RegionMatch::Default {
            trace!(
                transcript_id = %annotation.transcript_id,
                transcript_type = %annotation.transcript_type,
                "scanning target with unrecognized transcript type"
            );
        }

        let query = query_sequence.as_bytes();
        let target = target_sequence.as_bytes();
        let qlen = query.len();
        let tlen = target.len();
        // An empty window cannot satisfy match_end > match_start.
        if qlen == 0 || tlen < qlen {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for pos in 0..=(tlen - qlen) {
            let window = &target[pos..pos + qlen];
            let distance = substitution_distance(query, window);
            if is_valid_hit(distance, self.max_distance) {
                hits.push(Hit {
                    query_id: query_id.to_string(),
                    query_sequence: query_sequence.to_string(),
                    transcript_id: annotation.transcript_id.clone(),
                    gene_symbol: annotation.gene_symbol.clone(),
                    transcript_type: annotation.transcript_type.clone(),
                    match_start: pos,
                    match_end: pos + qlen,
                    matched_sequence: String::from_utf8_lossy(window).into_owned(),
                    distance: distance as u32,
                });
            }
        }
        hits
    }
}

/// Scan one target for one query with the default region policy.
pub fn scan(
    query_id: &str,
    query_sequence: &str,
    target_header: &str,
    target_sequence: &str,
    max_distance: u32,
) -> Vec<Hit> {
    WindowScanner::new(max_distance).scan(query_id, query_sequence, target_header, target_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_substring() {
        let hits = scan("Q1", "ATCGATCG", "NM_1 (G1) mRNA", "GGATCGATCGTT", 0);
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.match_start, 2);
        assert_eq!(hit.match_end, 10);
        assert_eq!(hit.matched_sequence, "ATCGATCG");
        assert_eq!(hit.distance, 0);
        assert_eq!(hit.transcript_id, "NM_1");
    }

    #[test]
    fn keeps_overlapping_hits_in_order() {
        let hits = scan("Q", "AAA", "GENE1|exon", "AAAAA", 0);
        let starts: Vec<usize> = hits.iter().map(|hit| hit.match_start).collect();
        assert_eq!(starts, vec![0, 1, 2]);
        assert!(hits.iter().all(|hit| hit.gene_symbol == "GENE1"));
        assert!(hits.iter().all(|hit| hit.transcript_type == "exon"));
    }

    #[test]
    fn short_target_yields_nothing() {
        assert!(scan("Q", "ATCGATCG", "GENE1|exon", "ATCG", 2).is_empty());
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(scan("Q", "", "GENE1|exon", "ATCG", 2).is_empty());
    }

    #[test]
    fn target_equal_to_query_has_single_window() {
        let hits = scan("Q", "ATCG", "GENE1|exon", "ATCC", 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].distance, 1);
        assert_eq!((hits[0].match_start, hits[0].match_end), (0, 4));
    }

    #[test]
    fn tolerance_bounds_distance() {
        let hits = scan("Q", "AAAA", "GENE1|exon", "AAAATTTT", 2);
        let distances: Vec<u32> = hits.iter().map(|hit| hit.distance).collect();
        assert_eq!(distances, vec![0, 1, 2]);
    }

    #[test]
    fn functional_only_policy_skips_unknown_types() {
        let scanner = WindowScanner::new(0).with_policy(RegionPolicy::FunctionalOnly);
        assert!(scanner.scan("Q", "ACGT", "GENE1|pseudogene", "ACGT").is_empty());
        assert_eq!(scanner.scan("Q", "ACGT", "GENE1|exon", "ACGT").len(), 1);
    }
}
