#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use asoscreen::screening::{Query, TargetRecord};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("ASOSCREEN_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set ASOSCREEN_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Two ASOs used across the integration tests.
pub fn panel_queries() -> Vec<Query> {
    vec![
        Query::new("ASO_001", "ATCGATCG"),
        Query::new("ASO_002", "GCTAGCTA"),
    ]
}

/// Transcript panel mixing RefSeq, mock, short and unstructured records.
pub fn panel_targets() -> Vec<TargetRecord> {
    vec![
        TargetRecord::new(
            "NM_000014.6 Homo sapiens alpha-2-macroglobulin (A2M), transcript variant 1, mRNA",
            "GGATCGATCGTTATCGATCC",
        ),
        TargetRecord::new("GENE1|exon", "GCTAGCTAGC"),
        TargetRecord::new(
            "NR_046018.2 Homo sapiens DEAD/H-box helicase 11 like 1 (DDX11L1), non-coding RNA",
            "AC",
        ),
        TargetRecord::new("chr12 unplaced contig", "TTGCTAGCTTAA"),
    ]
}
