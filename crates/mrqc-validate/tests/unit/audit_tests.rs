//! Tests for audit row derivation

use crate::test_utils::{clean_record, finding, operation, run, with_field};
use mrqc_domain::{AuditRow, FieldStatus, OperationEntry, Record, Severity, MAIN_FIELDS};
use mrqc_validate::audit::{field_status, is_checked, operations_status};
use mrqc_validate::{build_row, serialize_operations};

const RUN_AT: &str = "19-10-2026 09:30:00";

fn row_for(record: &Record) -> AuditRow {
    let validation = run(record);
    build_row(record, &validation.findings, &validation.case_id, RUN_AT.to_string())
}

#[test]
fn test_missing_required_field_fails() {
    let row = row_for(&with_field("name", ""));
    assert!(is_checked("name"));
    assert_eq!(row.status_of("name"), Some(FieldStatus::Failed));
    assert_eq!(row.status_of("gender"), Some(FieldStatus::Passed));
}

#[test]
fn test_unchecked_field_is_not_checked() {
    let row = row_for(&clean_record());
    assert_eq!(row.status_of("ethnicity"), Some(FieldStatus::NotChecked));
    assert_eq!(
        row.status_of("syphilis_screening_pregnancy"),
        Some(FieldStatus::NotChecked)
    );
    assert_eq!(row.status_of("work_unit_zip"), Some(FieldStatus::Passed));
}

#[test]
fn test_multi_field_reference_fails_each_field() {
    let row = row_for(&with_field("marriage_status", "未婚"));
    assert_eq!(row.status_of("marriage_status"), Some(FieldStatus::Failed));
    assert_eq!(row.status_of("contact_relationship"), Some(FieldStatus::Failed));
}

#[test]
fn test_unchecked_field_named_by_finding_fails() {
    let findings = vec![finding(Severity::Notice, "民族")];
    assert_eq!(field_status("ethnicity", &findings), FieldStatus::Failed);
    assert_eq!(field_status("ethnicity", &[]), FieldStatus::NotChecked);
}

#[test]
fn test_label_match_is_exact() {
    // "姓名" must not fail because "联系人姓名" was named.
    let findings = vec![finding(Severity::Notice, "联系人姓名")];
    assert_eq!(field_status("name", &findings), FieldStatus::Passed);
    assert_eq!(field_status("contact_name", &findings), FieldStatus::Failed);
}

#[test]
fn test_row_values_and_width() {
    let row = row_for(&clean_record());
    assert_eq!(row.case_id, "2025000123");
    assert_eq!(row.run_at, RUN_AT);
    assert_eq!(row.fields.len(), MAIN_FIELDS.len());
    assert_eq!(row.fields[0], ("张三".to_string(), FieldStatus::Passed));
    assert_eq!(row.to_cells().len(), AuditRow::header().len());
}

#[test]
fn test_case_id_argument_wins() {
    let record = clean_record();
    let row = build_row(&record, &[], "OVERRIDE", RUN_AT.to_string());
    assert_eq!(row.case_id, "OVERRIDE");

    let row = build_row(&record, &[], "", RUN_AT.to_string());
    assert_eq!(row.case_id, "2025000123");
}

#[test]
fn test_operations_status() {
    assert_eq!(operations_status(&[]), FieldStatus::Passed);

    let surgeon = vec![finding(Severity::Warning, "手术及操作 2 - 主刀医师")];
    assert_eq!(operations_status(&surgeon), FieldStatus::Failed);

    let fee = vec![finding(Severity::Error, "麻醉费用/手术操作")];
    assert_eq!(operations_status(&fee), FieldStatus::Failed);

    let unrelated = vec![finding(Severity::Error, "姓名")];
    assert_eq!(operations_status(&unrelated), FieldStatus::Passed);
}

#[test]
fn test_operations_failed_in_row() {
    let mut record = clean_record();
    record.operations = vec![operation("A1", "", "", "")];
    let row = row_for(&record);
    assert_eq!(row.operations_status, FieldStatus::Failed);
}

#[test]
fn test_serialize_operations() {
    let first = OperationEntry {
        operation_code: Some("00.4001".to_string()),
        operation_name: Some("单根导管置入".to_string()),
        ..Default::default()
    };
    let second = OperationEntry {
        surgeon: Some("王医生".to_string()),
        is_dsa: Some("否".to_string()),
        ..Default::default()
    };

    assert_eq!(
        serialize_operations(&[first, second]),
        "[(手术及操作编码:00.4001,手术及操作名称:单根导管置入),(主刀医师:王医生,是否DSA下造影:否)]"
    );
}

#[test]
fn test_empty_operations_cell() {
    let row = row_for(&clean_record());
    assert_eq!(row.operations, "");
}
