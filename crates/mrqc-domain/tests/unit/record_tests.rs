//! Unit tests for the record model

use mrqc_domain::{Error, Flag, OperationEntry, Record};
use serde_json::json;

#[test]
fn test_from_value_scalars() {
    let record = Record::from_value(json!({
        "name": "张三",
        "nationality": null,
        "admission_times": 3,
        "emergency_case": true,
        "operations": []
    }))
    .expect("record should parse");

    assert_eq!(record.get("name"), Some("张三"));
    assert_eq!(record.get("nationality"), None);
    assert!(record.fields.contains_key("nationality"));
    assert_eq!(record.get("admission_times"), Some("3"));
    assert_eq!(record.flag("emergency_case"), Flag::Yes);
}

#[test]
fn test_from_value_rejects_non_object() {
    let err = Record::from_value(json!(["name"])).expect_err("array is not a record");
    assert!(matches!(err, Error::InvalidRecord { .. }));
}

#[test]
fn test_operations_must_be_a_list_of_objects() {
    let err = Record::from_value(json!({"operations": "none"})).expect_err("not a list");
    assert!(matches!(err, Error::InvalidRecord { .. }));

    let err = Record::from_value(json!({"operations": ["x"]})).expect_err("not an object");
    assert!(matches!(err, Error::InvalidRecord { .. }));
}

#[test]
fn test_null_operations_is_empty() {
    let record = Record::from_value(json!({"operations": null})).expect("record should parse");
    assert!(record.operations.is_empty());
}

#[test]
fn test_nested_values_on_other_keys_are_ignored() {
    let record = Record::from_value(json!({
        "name": "李四",
        "other_diagnoses": [{"other_diagnosis_disease_code": "B02.2"}]
    }))
    .expect("record should parse");
    assert!(!record.fields.contains_key("other_diagnoses"));
}

#[test]
fn test_operation_entry_parsing() {
    let record = Record::from_json(
        r#"{"operations": [{"operation_code": "手术003", "anesthesia_method": "局麻", "anesthesiologist": ""}]}"#,
    )
    .expect("record should parse");

    let op = &record.operations[0];
    assert!(op.has_code());
    assert!(!op.has_surgeon());
    assert!(op.has_anesthesia_method());
    assert!(!op.has_anesthesiologist());
}

#[test]
fn test_operation_entry_scalars_become_text() {
    let record = Record::from_value(json!({
        "name": 42,
        "operations": [{
            "operation_code": 123,
            "is_dsa": true,
            "surgeon": null,
            "anesthesia_method": {"code": "1"}
        }]
    }))
    .expect("record should parse");

    assert_eq!(record.get("name"), Some("42"));
    let op = &record.operations[0];
    assert_eq!(op.operation_code.as_deref(), Some("123"));
    assert_eq!(op.is_dsa.as_deref(), Some("true"));
    assert_eq!(op.surgeon, None);
    assert!(!op.has_anesthesia_method());
}

#[test]
fn test_blank_placeholders() {
    let record = Record::new()
        .with_field("a", "")
        .with_field("b", "-")
        .with_field("c", "无")
        .with_field("d", "王主任");
    assert!(record.is_blank("a"));
    assert!(record.is_blank("b"));
    assert!(record.is_blank("c"));
    assert!(!record.is_blank("d"));
    assert!(record.is_blank("missing"));
}

#[test]
fn test_present_skips_empty() {
    let record = Record::new().with_field("a", "").with_field("b", "x");
    assert_eq!(record.present("a"), None);
    assert_eq!(record.present("b"), Some("x"));
}

#[test]
fn test_case_id() {
    let record = Record::new().with_field("case_number_verify", "2025123456");
    assert_eq!(record.case_id(), "2025123456");
    assert_eq!(Record::new().case_id(), "");
}

#[test]
fn test_operation_entries_keep_supplied_fields_in_order() {
    let op = OperationEntry {
        operation_code: Some("A1".to_string()),
        surgeon: Some("王".to_string()),
        is_operation: Some("1".to_string()),
        ..Default::default()
    };
    assert_eq!(
        op.entries(),
        vec![("operation_code", "A1"), ("surgeon", "王"), ("is_operation", "1")]
    );
}
