//! Functional-region gate applied to annotated transcript types.

use super::types::NA;

/// RefSeq transcript types treated as transcribed, functional sequence.
const FUNCTIONAL_TYPES: [&str; 6] = [
    "mrna",
    "rna",
    "non-coding rna",
    "noncoding rna",
    "lncrna",
    "long non-coding",
];

/// Region labels used by delimited mock headers.
const LEGACY_REGION_TYPES: [&str; 2] = ["exon", "intron"];

/// Which rule admitted a transcript type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMatch {
    /// Type was the `NA` sentinel.
    Unannotated,
    /// Type is one of the known functional or legacy region labels.
    Known,
    /// Type contains a known functional label.
    Contains,
    /// No rule matched; admitted by the permissive default.
    Default,
}

impl RegionMatch {
    /// Every classification is scanned.
    pub fn is_functional(self) -> bool {
        true
    }
}

/// Selects which [`RegionMatch`] classes the scanner accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionPolicy {
    /// Scan every record, including unrecognized types.
    #[default]
    AlwaysScan,
    /// Skip records whose type matched no known functional label.
    FunctionalOnly,
}

impl RegionPolicy {
    /// Whether a record with the given type should be scanned.
    pub fn admits(self, transcript_type: &str) -> bool {
        let class = classify_region(transcript_type);
        match self {
            RegionPolicy::AlwaysScan => class.is_functional(),
            RegionPolicy::FunctionalOnly => class != RegionMatch::Default,
        }
    }
}

/// Classify a transcript type against the functional label sets.
pub fn classify_region(transcript_type: &str) -> RegionMatch {
    if transcript_type == NA {
        return RegionMatch::Unannotated;
    }

    let lower = transcript_type.to_lowercase();
    if FUNCTIONAL_TYPES.contains(&lower.as_str())
        || LEGACY_REGION_TYPES.contains(&lower.as_str())
    {
        return RegionMatch::Known;
    }
    if FUNCTIONAL_TYPES.iter().any(|label| lower.contains(label)) {
        return RegionMatch::Contains;
    }
    RegionMatch::Default
}

/// Whether a transcript type participates in scanning.
///
/// Unknown types are included: a spurious hit is preferred over a missed
/// off-target site.
pub fn is_functional(transcript_type: &str) -> bool {
    classify_region(transcript_type).is_functional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("NA", RegionMatch::Unannotated ; "sentinel")]
    #[test_case("mRNA", RegionMatch::Known ; "mrna")]
    #[test_case("non-coding RNA", RegionMatch::Known ; "non-coding")]
    #[test_case("lncRNA", RegionMatch::Known ; "lncrna")]
    #[test_case("exon", RegionMatch::Known ; "exon")]
    #[test_case("INTRON", RegionMatch::Known ; "intron uppercase")]
    #[test_case("snoRNA", RegionMatch::Contains ; "contains rna")]
    #[test_case("utr", RegionMatch::Default ; "unknown")]
    #[test_case("", RegionMatch::Default ; "empty")]
    fn classifies_types(transcript_type: &str, expected: RegionMatch) {
        assert_eq!(classify_region(transcript_type), expected);
    }

    #[test_case("NA" ; "sentinel type")]
    #[test_case("mRNA" ; "mrna type")]
    #[test_case("exon" ; "exon type")]
    #[test_case("pseudogene" ; "unrecognized type")]
    #[test_case("" ; "empty type")]
    fn every_type_is_functional(transcript_type: &str) {
        assert!(is_functional(transcript_type));
        assert!(RegionPolicy::AlwaysScan.admits(transcript_type));
    }

    #[test]
    fn functional_only_rejects_unmatched_types() {
        assert!(RegionPolicy::FunctionalOnly.admits("NA"));
        assert!(RegionPolicy::FunctionalOnly.admits("exon"));
        assert!(RegionPolicy::FunctionalOnly.admits("misc_RNA"));
        assert!(!RegionPolicy::FunctionalOnly.admits("pseudogene"));
    }
}
