//! Integration tests for the `factfold-store` file layer.
//!
//! Each test writes fixture files into a fresh temporary directory, so no
//! external setup is needed.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::{Path, PathBuf};

use factfold_ledger::{SchemaIndex, active_facts};
use factfold_store::{
    BoolMode, StoreError, read_facts_file, read_schema_file, render_facts,
    write_active_facts_file, write_facts_file,
};
use factfold_types::{ActiveFact, Cardinality, FactOp, FactValue};
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("failed to read output")
}

// =============================================================================
// Golden file
// =============================================================================

#[test]
fn end_to_end_golden_file() {
    let dir = TempDir::new().expect("tempdir");
    let schema_path = fixture(&dir, "schema.txt", "name---string---one\ntag---string---many\n");
    let facts_path = fixture(
        &dir,
        "facts.txt",
        "e1---name---Alice---true\n\
         e1---tag---x---true\n\
         e1---tag---y---true\n\
         e1---tag---x---false\n\
         e1---name---Bob---true\n",
    );
    let output_path = dir.path().join("output.txt");

    let schema = SchemaIndex::new(read_schema_file(&schema_path).expect("schema"));
    let ops = read_facts_file(&facts_path, BoolMode::Permissive).expect("facts");
    let facts = active_facts(&ops, &schema);
    write_active_facts_file(&output_path, &facts).expect("write");

    assert_eq!(read(&output_path), "e1---name---Bob---True\ne1---tag---y---True\n");
}

#[test]
fn integer_values_are_typed_and_emitted_bare() {
    let dir = TempDir::new().expect("tempdir");
    let schema_path = fixture(&dir, "schema.txt", "score---integer---many\n");
    let facts_path = fixture(
        &dir,
        "facts.txt",
        "p1---score---42---True\np1---score---4a---True\np1---score---007---True\n",
    );

    let schema = SchemaIndex::new(read_schema_file(&schema_path).expect("schema"));
    assert_eq!(schema.cardinality_of("score"), Cardinality::Many);

    let ops = read_facts_file(&facts_path, BoolMode::Permissive).expect("facts");
    assert_eq!(ops[0].value, FactValue::Integer(42));
    assert_eq!(ops[1].value, FactValue::Text("4a".to_owned()));
    assert_eq!(ops[2].value, FactValue::Integer(7));

    assert_eq!(
        active_facts(&ops, &schema),
        vec![
            ActiveFact::new("p1", "score", 42_i64),
            ActiveFact::new("p1", "score", "4a"),
            ActiveFact::new("p1", "score", 7_i64),
        ],
    );
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn written_fact_files_are_stable_under_rewrite() {
    let dir = TempDir::new().expect("tempdir");
    let facts = vec![
        FactOp::assert("e1", "name", "Alice"),
        FactOp::retract("e1", "name", "Alice"),
        FactOp::assert("e2", "age", 30_i64),
        FactOp::assert("e2", "tag", "blue green"),
    ];

    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    write_facts_file(&first, &facts).expect("write first");
    let reread = read_facts_file(&first, BoolMode::Strict).expect("reread");
    write_facts_file(&second, &reread).expect("write second");

    assert_eq!(read(&first), read(&second));
    assert_eq!(read(&first), render_facts(&facts));
    assert_eq!(reread, facts);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn malformed_fact_file_fails_the_load() {
    let dir = TempDir::new().expect("tempdir");
    let path = fixture(&dir, "facts.txt", "e1---name---Alice---true\ne1---name\n");

    let err = read_facts_file(&path, BoolMode::Permissive).unwrap_err();
    assert!(matches!(err, StoreError::MalformedRecord { line: 2, found: 2, .. }));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn strict_mode_rejects_unknown_flags() {
    let dir = TempDir::new().expect("tempdir");
    let path = fixture(&dir, "facts.txt", "e1---name---Alice---yes\n");

    let permissive = read_facts_file(&path, BoolMode::Permissive).expect("permissive");
    assert!(!permissive[0].asserted);

    let err = read_facts_file(&path, BoolMode::Strict).unwrap_err();
    assert!(matches!(err, StoreError::InvalidFlag { line: 1, .. }));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.txt");

    let err = read_schema_file(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}
