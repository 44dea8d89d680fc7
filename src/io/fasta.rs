use std::io::BufRead;
use std::path::Path;

use super::{open_buffered, InputError};
use crate::screening::TargetRecord;

/// Read transcript records from FASTA.
///
/// Headers are stored without `>`; multi-line sequences are joined and
/// uppercased. Lines before the first header are ignored.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<TargetRecord>, InputError> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            if let Some(previous) = header.take() {
                records.push(TargetRecord::new(previous, &sequence));
            }
            header = Some(rest.trim().to_string());
            sequence.clear();
        } else {
            sequence.push_str(line);
        }
    }

    if let Some(last) = header {
        records.push(TargetRecord::new(last, &sequence));
    }

    if records.is_empty() {
        return Err(InputError::NoRecords { kind: "sequences" });
    }
    Ok(records)
}

/// Read a FASTA file from disk.
pub fn read_fasta_path(path: impl AsRef<Path>) -> Result<Vec<TargetRecord>, InputError> {
    read_fasta(open_buffered(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn joins_multiline_records() {
        let input = ">NM_000014.6 Homo sapiens (A2M), mRNA\nacgt\nTTGG\n\n> GENE1|exon \nNNAC\n";
        let records = read_fasta(Cursor::new(input)).expect("valid FASTA");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "NM_000014.6 Homo sapiens (A2M), mRNA");
        assert_eq!(records[0].sequence, "ACGTTTGG");
        assert_eq!(records[1].header, "GENE1|exon");
        assert_eq!(records[1].sequence, "NNAC");
    }

    #[test]
    fn header_without_sequence_is_kept() {
        let records = read_fasta(Cursor::new(">empty\n>full\nAC\n")).expect("valid FASTA");
        assert_eq!(records[0], TargetRecord::new("empty", ""));
        assert_eq!(records[1], TargetRecord::new("full", "AC"));
    }

    #[test]
    fn leading_sequence_lines_are_ignored() {
        let records = read_fasta(Cursor::new("GGGG\n>t1\nAC\n")).expect("valid FASTA");
        assert_eq!(records, vec![TargetRecord::new("t1", "AC")]);
    }

    #[test]
    fn no_headers_is_error() {
        let err = read_fasta(Cursor::new("ACGT\n")).unwrap_err();
        assert!(matches!(err, InputError::NoRecords { .. }));
    }
}
