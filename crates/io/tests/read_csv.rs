//! Integration tests: read applicant tables from real CSV files.

use std::io::Write;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use peerscope_io::{IoError, ReaderConfig, read_applicants};

/// Writes `content` to a file in a fresh temp dir and returns its path
/// (plus the guard keeping the dir alive).
fn write_csv(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("applicants.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(content.as_bytes()).expect("write csv");
    (dir, path)
}

const SAMPLE: &str = "\
SK_ID_CURR,AMT_CREDIT,AMT_INCOME,TARGET_PROB
100001,0.52,-1.20,0.31
100002,-0.11,0.40,0.72
100003,1.95,0.03,0.05
";

#[test]
fn read_sample_table() {
    let (_dir, path) = write_csv(SAMPLE);
    let table = read_applicants(&path, &ReaderConfig::default()).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.ids(), &[100001, 100002, 100003]);
    assert_eq!(
        table.feature_names(),
        &["AMT_CREDIT".to_string(), "AMT_INCOME".to_string()]
    );
    assert_eq!(table.score_column(), "TARGET_PROB");

    assert_abs_diff_eq!(table.score(100002).unwrap(), 0.72, epsilon = 1e-12);
    let row = table.row(100003).unwrap();
    assert_abs_diff_eq!(row[0], 1.95, epsilon = 1e-12);
    assert_abs_diff_eq!(row[1], 0.03, epsilon = 1e-12);
}

#[test]
fn score_column_in_the_middle() {
    // Score column need not be last.
    let csv = "\
id,F1,TARGET_PROB,F2
1,0.1,0.9,0.2
2,0.3,0.4,0.5
";
    let (_dir, path) = write_csv(csv);
    let table = read_applicants(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.feature_names(), &["F1".to_string(), "F2".to_string()]);
    assert_eq!(table.scores(), &[0.9, 0.4]);
    assert_eq!(table.row(2), Some(&[0.3, 0.5][..]));
}

#[test]
fn custom_score_column_and_delimiter() {
    let csv = "id;F1;proba\n7;1.5;0.66\n";
    let (_dir, path) = write_csv(csv);
    let config = ReaderConfig::default()
        .with_score_column("proba")
        .with_delimiter(b';');
    let table = read_applicants(&path, &config).unwrap();
    assert_eq!(table.len(), 1);
    assert_abs_diff_eq!(table.score(7).unwrap(), 0.66, epsilon = 1e-12);
}

#[test]
fn error_file_not_found() {
    let path = PathBuf::from("/nonexistent/applicants.csv");
    let result = read_applicants(&path, &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::FileNotFound { .. })));
}

#[test]
fn error_missing_score_column() {
    let (_dir, path) = write_csv("id,F1\n1,0.5\n");
    let result = read_applicants(&path, &ReaderConfig::default());
    match result {
        Err(IoError::MissingColumn { name, .. }) => assert_eq!(name, "TARGET_PROB"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn error_bad_feature_cell() {
    let (_dir, path) = write_csv("id,F1,TARGET_PROB\n1,abc,0.5\n");
    let result = read_applicants(&path, &ReaderConfig::default());
    match result {
        Err(IoError::InvalidCell { row, column, value }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "F1");
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidCell, got {other:?}"),
    }
}

#[test]
fn error_bad_id_cell() {
    let (_dir, path) = write_csv("id,F1,TARGET_PROB\n-3,0.1,0.5\n");
    let result = read_applicants(&path, &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::InvalidCell { row: 1, .. })));
}

#[test]
fn error_duplicate_ids() {
    let (_dir, path) = write_csv("id,F1,TARGET_PROB\n1,0.1,0.5\n1,0.2,0.6\n");
    let result = read_applicants(&path, &ReaderConfig::default());
    match result {
        Err(IoError::Validation { count, details }) => {
            assert_eq!(count, 1);
            assert!(details.contains("duplicate id 1"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn error_empty_table() {
    let (_dir, path) = write_csv("id,F1,TARGET_PROB\n");
    let result = read_applicants(&path, &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::Validation { .. })));
}
