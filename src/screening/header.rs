//! Transcript header annotation.
//!
//! Headers arrive in one of two shapes:
//!
//! - RefSeq style: `NM_000014.6 Homo sapiens alpha-2-macroglobulin (A2M), transcript variant 1, mRNA`
//! - delimited mock style: `GENE1|exon`
//!
//! Anything else falls back to the first token as the transcript id. Parsing
//! never fails; fields that cannot be derived are filled with [`NA`].

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Annotation, NA};

static ACCESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([NX][MR]_\d+\.\d+)\s+(.+)$").expect("accession pattern is valid")
});

static GENE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Z0-9_-]+)\)").expect("gene symbol pattern is valid"));

/// Derive an [`Annotation`] from a header line (with or without `>`).
pub fn parse_header(header: &str) -> Annotation {
    let header = header.trim_start_matches('>').trim();

    if let Some(caps) = ACCESSION.captures(header) {
        let rest = &caps[2];
        let gene_symbol = GENE_SYMBOL
            .captures(rest)
            .map(|gene| gene[1].to_string())
            .unwrap_or_else(|| NA.to_string());

        return Annotation {
            transcript_id: caps[1].to_string(),
            gene_symbol,
            transcript_type: transcript_type_from_description(rest).to_string(),
            full_header: header.to_string(),
        };
    }

    if header.contains('|') {
        let mut parts = header.split('|');
        if let (Some(gene), Some(kind)) = (parts.next(), parts.next()) {
            return Annotation {
                transcript_id: header.to_string(),
                gene_symbol: gene.trim().to_string(),
                transcript_type: kind.trim().to_string(),
                full_header: header.to_string(),
            };
        }
    }

    Annotation {
        transcript_id: header
            .split_whitespace()
            .next()
            .unwrap_or(NA)
            .to_string(),
        gene_symbol: NA.to_string(),
        transcript_type: NA.to_string(),
        full_header: header.to_string(),
    }
}

/// Transcript type implied by the free-text description of a RefSeq header.
fn transcript_type_from_description(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    if lower.contains("non-coding rna") || lower.contains("noncoding rna") {
        "non-coding RNA"
    } else if lower.contains("lncrna") || lower.contains("long non-coding") {
        "lncRNA"
    } else if lower.contains("mrna") {
        "mRNA"
    } else if lower.contains("rna") {
        "RNA"
    } else {
        NA
    }
}
