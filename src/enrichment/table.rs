use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{AdvisoryRequest, Enricher, EnrichmentError};

/// Offline enricher backed by a `gene_symbol<TAB>advisory` table.
#[derive(Debug, Default, Clone)]
pub struct AdvisoryTable {
    entries: HashMap<String, String>,
}

impl AdvisoryTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the advisory for a gene.
    pub fn insert(&mut self, gene_symbol: impl Into<String>, advisory: impl Into<String>) {
        self.entries.insert(gene_symbol.into(), advisory.into());
    }

    /// Number of genes with an advisory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table holds no advisories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a tab-separated table; blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EnrichmentError> {
        let mut table = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (gene, advisory) = trimmed
                .split_once('\t')
                .ok_or(EnrichmentError::InvalidTable { line: idx + 1 })?;
            table.insert(gene.trim(), advisory.trim());
        }
        Ok(table)
    }

    /// Load a table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnrichmentError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

impl Enricher for AdvisoryTable {
    fn name(&self) -> &str {
        "advisory_table"
    }

    fn advise(&self, request: &AdvisoryRequest<'_>) -> Result<Option<String>, EnrichmentError> {
        Ok(self.entries.get(request.gene_symbol).cloned())
    }
}
