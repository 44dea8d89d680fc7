use serde::{Deserialize, Serialize};

/// Sentinel used for any annotation field that could not be derived.
pub const NA: &str = "NA";

/// Antisense oligonucleotide being screened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Identifier supplied by the query source.
    pub id: String,
    /// Uppercase nucleotide sequence.
    pub sequence: String,
}

impl Query {
    /// Construct a query, normalizing the sequence to uppercase.
    pub fn new(id: impl Into<String>, sequence: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.as_ref().to_ascii_uppercase(),
        }
    }

    /// Query length in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` for a zero-length query.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Transcript record as delivered by the target source.
///
/// Only the raw header is kept; annotation is derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    /// Free-text header without the leading `>`.
    pub header: String,
    /// Uppercase nucleotide sequence.
    pub sequence: String,
}

impl TargetRecord {
    /// Construct a target record, normalizing the sequence to uppercase.
    pub fn new(header: impl Into<String>, sequence: impl AsRef<str>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.as_ref().to_ascii_uppercase(),
        }
    }

    /// Target length in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` for a zero-length target.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Structured view of a transcript header.
///
/// Every field is either a substring of the header or [`NA`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Transcript accession (or the full header for delimited records).
    pub transcript_id: String,
    /// Gene symbol.
    pub gene_symbol: String,
    /// Transcript or region type.
    pub transcript_type: String,
    /// Header with the record marker and surrounding whitespace removed.
    pub full_header: String,
}

/// A window of a target sequence within mismatch tolerance of a query.
///
/// Field names serialize to the column names of the hit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Identifier of the query.
    #[serde(rename = "aso_id")]
    pub query_id: String,
    /// Query sequence.
    #[serde(rename = "aso_sequence")]
    pub query_sequence: String,
    /// Transcript identifier from the target annotation.
    pub transcript_id: String,
    /// Gene symbol from the target annotation.
    pub gene_symbol: String,
    /// Transcript type from the target annotation.
    pub transcript_type: String,
    /// 0-based window start.
    pub match_start: usize,
    /// 0-based exclusive window end.
    pub match_end: usize,
    /// Target bases covered by the window.
    pub matched_sequence: String,
    /// Substitution-only distance between query and window.
    #[serde(rename = "edit_distance")]
    pub distance: u32,
}

impl Hit {
    /// Window length on the target.
    pub fn span(&self) -> usize {
        self.match_end - self.match_start
    }
}
