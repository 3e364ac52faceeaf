//! Audit store tests

use crate::test_utils::{clean_record, table_path};
use chrono::NaiveDateTime;
use mrqc_domain::constants::AUDIT_TIMESTAMP_FORMAT;
use mrqc_domain::{AuditRow, AuditTrail, Category, Error, Finding, Result, Severity};
use mrqc_infrastructure::audit::{AuditStore, CsvAuditTrail};
use mrqc_infrastructure::config::AuditConfig;
use std::sync::Arc;
use tempfile::TempDir;

/// Trail whose every write fails
struct BrokenTrail;

impl AuditTrail for BrokenTrail {
    fn append(&self, _row: &AuditRow) -> Result<usize> {
        Err(Error::io("disk full"))
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(Vec::new())
    }
}

fn csv_store(dir: &TempDir) -> AuditStore {
    AuditStore::new(Arc::new(CsvAuditTrail::new(table_path(dir.path()), 50)))
}

fn column(name: &str) -> usize {
    AuditRow::header()
        .iter()
        .position(|h| h == name)
        .expect("column exists")
}

#[test]
fn test_append_snapshot_persists_and_remembers() {
    let dir = TempDir::new().expect("temp dir");
    let store = csv_store(&dir);
    let record = clean_record();

    assert!(store.last_snapshot().is_none());
    assert!(store.append_snapshot(&record, &[], "A1"));

    let snapshot = store.last_snapshot().expect("snapshot kept");
    assert_eq!(snapshot.case_id, "A1");
    assert_eq!(snapshot.record, record);
    assert!(snapshot.findings.is_empty());
    assert_eq!(store.read_rows().expect("rows").len(), 1);
}

#[test]
fn test_empty_case_id_falls_back_to_record() {
    let dir = TempDir::new().expect("temp dir");
    let store = csv_store(&dir);

    assert!(store.append_snapshot(&clean_record(), &[], ""));

    let rows = store.read_rows().expect("rows");
    assert_eq!(rows[0][0], "2025000123");
    assert_eq!(store.last_snapshot().expect("snapshot").case_id, "2025000123");
}

#[test]
fn test_run_timestamp_uses_audit_format() {
    let dir = TempDir::new().expect("temp dir");
    let store = csv_store(&dir);
    store.append_snapshot(&clean_record(), &[], "A1");

    let rows = store.read_rows().expect("rows");
    assert!(NaiveDateTime::parse_from_str(&rows[0][1], AUDIT_TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn test_field_statuses_follow_findings() {
    let dir = TempDir::new().expect("temp dir");
    let store = csv_store(&dir);
    let record = clean_record().with_field("name", "");
    let findings = vec![Finding::new(
        "QC001",
        Category::Completeness,
        Severity::Error,
        "姓名",
        "不能为空",
    )];

    assert!(store.append_snapshot(&record, &findings, "A1"));

    let row = &store.read_rows().expect("rows")[0];
    assert_eq!(row[column("姓名质控")], "未通过");
    assert_eq!(row[column("性别质控")], "通过");
    assert_eq!(row[column("手术操作质控")], "通过");
    assert_eq!(row[column("手术操作")], "");
}

#[test]
fn test_write_failure_reports_false() {
    let store = AuditStore::new(Arc::new(BrokenTrail));

    assert!(!store.append_snapshot(&clean_record(), &[], "A1"));
    assert!(store.last_snapshot().is_none());
}

#[test]
fn test_from_config_uses_configured_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("history.csv");
    let config = AuditConfig {
        path: Some(path.clone()),
        max_records: 2,
        ..AuditConfig::default()
    };
    let store = AuditStore::from_config(&config);

    for case in ["A1", "A2", "A3"] {
        assert!(store.append_snapshot(&clean_record(), &[], case));
    }

    assert!(path.exists());
    let rows = store.read_rows().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "A2");
}
