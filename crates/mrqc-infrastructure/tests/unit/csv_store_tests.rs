//! CSV audit table tests

use crate::test_utils::{RUN_AT, audit_row, seed_table, table_path};
use mrqc_domain::constants::AUDIT_MAX_RECORDS;
use mrqc_domain::{AuditRow, AuditTrail};
use mrqc_infrastructure::audit::CsvAuditTrail;
use mrqc_infrastructure::constants::UTF8_BOM;
use tempfile::TempDir;

fn case_ids(trail: &CsvAuditTrail) -> Vec<String> {
    trail
        .read_rows()
        .expect("read rows")
        .into_iter()
        .map(|row| row[0].clone())
        .collect()
}

#[test]
fn test_first_append_creates_table_with_bom_and_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = table_path(dir.path());
    let trail = CsvAuditTrail::new(&path, 10);

    assert_eq!(trail.append(&audit_row("A1")).expect("append"), 1);

    let bytes = std::fs::read(&path).expect("table exists");
    assert!(bytes.starts_with(UTF8_BOM));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(&bytes[UTF8_BOM.len()..]);
    let header: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(header, AuditRow::header());
    assert_eq!(header[0], "病案号");
    assert_eq!(header[1], "运行日期");
}

#[test]
fn test_rows_read_back_as_written() {
    let dir = TempDir::new().expect("temp dir");
    let trail = CsvAuditTrail::new(table_path(dir.path()), 10);
    let row = audit_row("A1");

    trail.append(&row).expect("append");
    trail.append(&audit_row("A2")).expect("append");

    let rows = trail.read_rows().expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], row.to_cells());
    assert_eq!(rows[0][1], RUN_AT);
    assert_eq!(rows[1][0], "A2");
}

#[test]
fn test_missing_table_reads_empty() {
    let dir = TempDir::new().expect("temp dir");
    let trail = CsvAuditTrail::new(table_path(dir.path()), 10);
    assert!(trail.read_rows().expect("read rows").is_empty());
    assert!(!trail.path().exists());
}

#[test]
fn test_retention_drops_oldest() {
    let dir = TempDir::new().expect("temp dir");
    let trail = CsvAuditTrail::new(table_path(dir.path()), 3);

    for case in ["C1", "C2", "C3", "C4", "C5"] {
        let retained = trail.append(&audit_row(case)).expect("append");
        assert!(retained <= 3);
    }

    assert_eq!(case_ids(&trail), vec!["C3", "C4", "C5"]);
}

#[test]
fn test_full_table_stays_at_limit() {
    let dir = TempDir::new().expect("temp dir");
    let path = table_path(dir.path());
    seed_table(&path, "old", AUDIT_MAX_RECORDS);
    let trail = CsvAuditTrail::new(&path, AUDIT_MAX_RECORDS);

    let retained = trail.append(&audit_row("NEW")).expect("append");

    assert_eq!(retained, AUDIT_MAX_RECORDS);
    let ids = case_ids(&trail);
    assert_eq!(ids.len(), AUDIT_MAX_RECORDS);
    assert_eq!(ids[0], "old1");
    assert_eq!(ids[AUDIT_MAX_RECORDS - 1], "NEW");
    assert!(!ids.contains(&"old0".to_string()));
}

#[test]
fn test_ragged_rows_and_missing_bom_tolerated() {
    let dir = TempDir::new().expect("temp dir");
    let path = table_path(dir.path());
    seed_table(&path, "short", 2);
    let trail = CsvAuditTrail::new(&path, 10);

    let rows = trail.read_rows().expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["short0".to_string(), RUN_AT.to_string()]);

    assert_eq!(trail.append(&audit_row("A1")).expect("append"), 3);
    let rows = trail.read_rows().expect("read rows");
    assert_eq!(rows[1].len(), 2);
    assert_eq!(rows[2].len(), AuditRow::header().len());
}

#[test]
fn test_lock_file_sits_next_to_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = table_path(dir.path());
    let trail = CsvAuditTrail::new(&path, 10);

    assert_eq!(trail.lock_path(), path.with_file_name("records.csv.lock"));
    trail.append(&audit_row("A1")).expect("append");
    assert!(trail.lock_path().exists());
}

#[test]
fn test_zero_limit_keeps_one_row() {
    let dir = TempDir::new().expect("temp dir");
    let trail = CsvAuditTrail::new(table_path(dir.path()), 0);
    assert_eq!(trail.max_records(), 1);

    trail.append(&audit_row("A1")).expect("append");
    trail.append(&audit_row("A2")).expect("append");
    assert_eq!(case_ids(&trail), vec!["A2"]);
}

#[test]
fn test_concurrent_appends_are_serialized() {
    let dir = TempDir::new().expect("temp dir");
    let trail = std::sync::Arc::new(CsvAuditTrail::new(table_path(dir.path()), 100));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let trail = trail.clone();
            std::thread::spawn(move || trail.append(&audit_row(&format!("T{i}"))))
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread").expect("append");
    }

    let mut ids = case_ids(&trail);
    ids.sort();
    assert_eq!(ids, (0..8).map(|i| format!("T{i}")).collect::<Vec<_>>());
}
