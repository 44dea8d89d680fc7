use std::io::{Read, Write};

use anyhow::{anyhow, Result};

use super::InputError;
use crate::enrichment::EnrichedHit;
use crate::screening::Hit;

/// Column order of the hit table.
pub const HIT_COLUMNS: [&str; 9] = [
    "aso_id",
    "aso_sequence",
    "transcript_id",
    "gene_symbol",
    "transcript_type",
    "match_start",
    "match_end",
    "matched_sequence",
    "edit_distance",
];

/// Columns appended by enrichment.
pub const ENRICHED_COLUMNS: [&str; 2] = ["allelic_status", "consequence_annotation"];

fn hit_record(hit: &Hit) -> [String; 9] {
    [
        hit.query_id.clone(),
        hit.query_sequence.clone(),
        hit.transcript_id.clone(),
        hit.gene_symbol.clone(),
        hit.transcript_type.clone(),
        hit.match_start.to_string(),
        hit.match_end.to_string(),
        hit.matched_sequence.clone(),
        hit.distance.to_string(),
    ]
}

/// Write hits as CSV. The header row is written even when `hits` is empty.
pub fn write_hits<W: Write>(writer: W, hits: &[Hit]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HIT_COLUMNS)?;
    for hit in hits {
        csv_writer.write_record(hit_record(hit))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render hits into a CSV string (useful for tests and snapshots).
pub fn render_hits(hits: &[Hit]) -> Result<String> {
    let mut buffer = Vec::new();
    write_hits(&mut buffer, hits)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered hit table is not valid UTF-8"))
}

/// Write enriched hits: the hit columns followed by the enrichment columns.
pub fn write_enriched_hits<W: Write>(writer: W, hits: &[EnrichedHit]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HIT_COLUMNS.iter().chain(ENRICHED_COLUMNS.iter()))?;
    for enriched in hits {
        csv_writer.write_record(
            hit_record(&enriched.hit)
                .iter()
                .map(String::as_str)
                .chain([enriched.allelic_status.as_str(), enriched.annotation.as_str()]),
        )?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read a hit table written by [`write_hits`].
///
/// Extra columns, such as those added by enrichment, are ignored.
pub fn read_hits<R: Read>(reader: R) -> Result<Vec<Hit>, InputError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut hits = Vec::new();
    for record in csv_reader.deserialize() {
        hits.push(record?);
    }
    Ok(hits)
}
