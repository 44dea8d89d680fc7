use std::io::BufRead;
use std::path::Path;

use super::{open_buffered, InputError, VALID_BASES};
use crate::screening::Query;

/// Read a whitespace-separated query list.
///
/// Blank lines and `#` comments are skipped. Tokens after the id are
/// joined into one sequence, which is validated and uppercased.
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<Query>, InputError> {
    let mut queries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let id = tokens.next().unwrap_or_default();
        let sequence: String = tokens.collect();
        if sequence.is_empty() {
            return Err(InputError::InvalidFormat {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        if !sequence
            .bytes()
            .all(|base| VALID_BASES.contains(&base.to_ascii_uppercase()))
        {
            return Err(InputError::InvalidNucleotide {
                line: idx + 1,
                id: id.to_string(),
            });
        }

        queries.push(Query::new(id, sequence));
    }

    if queries.is_empty() {
        return Err(InputError::NoRecords {
            kind: "ASO sequences",
        });
    }
    Ok(queries)
}

/// Read a query list from disk.
pub fn read_queries_path(path: impl AsRef<Path>) -> Result<Vec<Query>, InputError> {
    read_queries(open_buffered(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_ids_and_sequences() {
        let input = "# header comment\nASO_001 atcgatcg\n\nASO_002\tGCTA GCTA\n";
        let queries = read_queries(Cursor::new(input)).expect("valid query list");
        assert_eq!(
            queries,
            vec![
                Query::new("ASO_001", "ATCGATCG"),
                Query::new("ASO_002", "GCTAGCTA"),
            ]
        );
    }

    #[test]
    fn missing_sequence_is_format_error() {
        let err = read_queries(Cursor::new("ASO_001 ACGT\nASO_002\n")).unwrap_err();
        assert!(matches!(err, InputError::InvalidFormat { line: 2, .. }));
    }

    #[test]
    fn rejects_non_nucleotides() {
        let err = read_queries(Cursor::new("ASO_001 ACGU\n")).unwrap_err();
        match err {
            InputError::InvalidNucleotide { line, id } => {
                assert_eq!(line, 1);
                assert_eq!(id, "ASO_001");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ambiguous_base_is_allowed() {
        let queries = read_queries(Cursor::new("ASO_N acgn\n")).expect("N is valid");
        assert_eq!(queries[0].sequence, "ACGN");
    }

    #[test]
    fn empty_list_is_error() {
        let err = read_queries(Cursor::new("# nothing\n\n")).unwrap_err();
        assert!(matches!(err, InputError::NoRecords { .. }));
    }
}
