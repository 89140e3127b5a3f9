// Integration test for the CSV column -> report chain.
//
// This test ensures a column read from disk flows through the analysis core
// and renders without losing counts.

use bf_cli_core::{load_column, report_json, report_table};
use bf_conf::InputConf;
use bf_stat::{StatError, analyze};
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BENFORD_1000: [u64; 9] = [301, 176, 125, 97, 79, 67, 58, 51, 46];

/// Helper to write a CSV whose `amount` leading digits follow `counts`
fn write_csv(name: &str, counts: &[u64; 9], extra_rows: &[&str]) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(name);
    let mut body = String::from("id,amount,currency\n");
    let mut id = 0;
    for (i, n) in counts.iter().enumerate() {
        for k in 0..*n {
            id += 1;
            let _ = writeln!(body, "{},{}{:02}.{},EUR", id, i + 1, k % 100, k % 7);
        }
    }
    for row in extra_rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();
    (temp, path)
}

#[test]
fn benford_column_validates_from_disk() {
    let (_temp, path) = write_csv("ledger.csv", &BENFORD_1000, &["x,,EUR", "y,0.00,EUR"]);
    let values = load_column(&path, "amount", &InputConf::default()).unwrap();
    assert_eq!(values.len(), 1002);

    let report = analyze(&values).unwrap();
    assert_eq!(*report.sample_size(), 1000);
    assert_eq!(*report.dropped(), 2);
    assert_eq!(report.observed().as_array(), &BENFORD_1000);
    assert!(report.validates());

    let json: serde_json::Value =
        serde_json::from_str(&report_json(&report, "amount").unwrap()).unwrap();
    assert_eq!(json["answer"], "YES");
}

#[test]
fn uniform_column_is_rejected_from_disk() {
    let (_temp, path) = write_csv("uniform.csv", &[100; 9], &[]);
    let values = load_column(&path, "amount", &InputConf::default()).unwrap();
    let report = analyze(&values).unwrap();
    assert!(!report.validates());
    assert!(report_table(&report).to_string().contains("113"));
}

#[test]
fn non_numeric_column_is_empty_input() {
    let (_temp, path) = write_csv("ledger.csv", &[100; 9], &[]);
    let values = load_column(&path, "currency", &InputConf::default()).unwrap();
    assert_eq!(values.len(), 900);
    assert_eq!(analyze(&values), Err(StatError::EmptyInput));
}

#[test]
fn load_errors_name_file_and_column() {
    let (_temp, path) = write_csv("ledger.csv", &[1; 9], &[]);
    let err = load_column(&path, "price", &InputConf::default()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("price"));
    assert!(msg.contains("ledger.csv"));

    let missing = path.with_file_name("nope.csv");
    let err = load_column(&missing, "amount", &InputConf::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.csv"));
}
