//! Record ingestion tests over files and readers.

use entropy_tree::*;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

mod common;
use common::*;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "0 1:1.0 2:5.0\n0 1:2.0 2:5.0\n1 1:8.0 2:1.0\n1 1:9.0 2:1.0\n-1 1:1.5 2:5.0\n"
    )
    .unwrap();

    let dataset = load_from_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.schema(), &[1, 2]);
    assert_eq!(dataset.training(), separable_training());
    assert_eq!(dataset.test().len(), 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(TreeError::Io { .. })));
}

#[test]
fn test_round_trip_through_text() {
    let training = random_training(3, 20, 3, 2);
    let dataset = load_from_str(&to_text(training.records())).unwrap();
    assert_eq!(dataset, training);
}

#[test]
fn test_attribute_order_in_line_is_irrelevant() {
    let dataset = load_from_str("0 2:5.0 1:1.0\n1 1:8.0 2:1.0\n").unwrap();
    assert_eq!(dataset.schema(), &[1, 2]);
    assert_eq!(dataset.records()[0].value(1), Some(1.0));
}

#[test]
fn test_trailing_whitespace_and_crlf() {
    let dataset = load_from_reader(Cursor::new("0 1:1.0  \r\n1 1:2.0\r\n\r\n")).unwrap();
    assert_eq!(dataset.len(), 2);
}

#[test]
fn test_malformed_line_halts_with_line_number() {
    let input = "0 1:1.0\n1 1:two\n-1 1:1.5\n";
    match load_from_str(input) {
        Err(TreeError::InvalidRecord { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("non-numeric"));
        }
        other => panic!("expected invalid record, got {:?}", other),
    }
}

#[test]
fn test_missing_schema_attribute_rejected() {
    let input = "0 1:1.0 2:2.0\n-1 1:1.5\n";
    assert!(matches!(
        load_from_str(input),
        Err(TreeError::InvalidRecord { line: 2, .. })
    ));
}

#[test]
fn test_schema_from_first_training_row() {
    // A leading test row with a different attribute set is rejected
    // against the schema of the first training row.
    let input = "-1 3:1.0\n0 1:1.0\n";
    assert!(matches!(
        load_from_str(input),
        Err(TreeError::InvalidRecord { line: 1, .. })
    ));
}
