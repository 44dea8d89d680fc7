//! End-to-end scenarios for the screening engine.

use asoscreen::screening::{
    parse_header, scan, scan_all, substitution_distance, Query, TargetRecord, INCOMPARABLE,
};

#[test]
fn distance_examples() {
    assert_eq!(substitution_distance(b"ATCG", b"ATCG"), 0);
    assert_eq!(substitution_distance(b"ATCG", b"ATCC"), 1);
    assert_eq!(substitution_distance(b"ATCG", b"ATC"), INCOMPARABLE);
}

#[test]
fn refseq_header_example() {
    let annotation = parse_header(
        "NM_000014.6 Homo sapiens alpha-2-macroglobulin (A2M), transcript variant 1, mRNA",
    );
    assert_eq!(annotation.transcript_id, "NM_000014.6");
    assert_eq!(annotation.gene_symbol, "A2M");
    assert_eq!(annotation.transcript_type, "mRNA");
}

#[test]
fn mock_header_example() {
    let annotation = parse_header("GENE1|exon");
    assert_eq!(annotation.transcript_id, "GENE1|exon");
    assert_eq!(annotation.gene_symbol, "GENE1");
    assert_eq!(annotation.transcript_type, "exon");
}

#[test]
fn exact_window_is_single_hit() {
    let hits = scan("Q1", "ATCGATCG", "NM_1 (G1) mRNA", "GGATCGATCGTT", 0);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_start, 2);
    assert_eq!(hits[0].match_end, 10);
    assert_eq!(hits[0].matched_sequence, "ATCGATCG");
    assert_eq!(hits[0].distance, 0);
}

#[test]
fn short_target_contributes_nothing_in_query_major_order() {
    let queries = vec![Query::new("Q1", "ACGTAC"), Query::new("Q2", "GGTTAA")];
    let targets = vec![
        TargetRecord::new("T1|exon", "ACGTACGGTTAA"),
        TargetRecord::new("T2|exon", "ACGT"),
        TargetRecord::new("T3|intron", "GGTTAAACGTAC"),
    ];

    let hits = scan_all(&queries, &targets, 1);
    assert!(hits.iter().all(|hit| hit.gene_symbol != "T2"));

    let order: Vec<(&str, &str, usize)> = hits
        .iter()
        .map(|hit| (hit.query_id.as_str(), hit.gene_symbol.as_str(), hit.match_start))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Q1", "T1", 0),
            ("Q1", "T3", 6),
            ("Q2", "T1", 6),
            ("Q2", "T3", 0),
        ]
    );
}

#[test]
fn empty_inputs_yield_no_hits() {
    let targets = vec![TargetRecord::new("T1|exon", "ACGT")];
    assert!(scan_all(&[], &targets, 2).is_empty());
    assert!(scan_all(&[Query::new("Q", "ACGT")], &[], 2).is_empty());
}
