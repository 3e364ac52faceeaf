//! Tests for phone format and sequence checks

use crate::test_utils::{CLEAN_CHECK_COUNT, findings_of, run, with_field};
use mrqc_domain::Severity;

#[test]
fn test_malformed_phone_warns() {
    let validation = run(&with_field("contact_phone", "12345"));
    let found = findings_of(&validation, "QC004");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Warning);
    assert_eq!(found[0].field_ref, "联系人电话");
    assert_eq!(found[0].message, "电话号码 '12345' 格式似乎不正确，请核实。");
    assert!(findings_of(&validation, "QC005").is_empty());
}

#[test]
fn test_sequential_mobile_number_warns() {
    let validation = run(&with_field("contact_phone", "13912345678"));
    assert!(findings_of(&validation, "QC004").is_empty());
    let found = findings_of(&validation, "QC005");
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].message,
        "电话号码 '13912345678' 包含连续或重复数字，请核实其有效性。"
    );
}

#[test]
fn test_both_phone_checks_fire_independently() {
    let validation = run(&with_field("contact_phone", "888888"));
    assert_eq!(findings_of(&validation, "QC004").len(), 1);
    assert_eq!(findings_of(&validation, "QC005").len(), 1);
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT);
}

#[test]
fn test_each_present_phone_is_one_check() {
    let record = with_field("current_address_phone", "021-64370045")
        .with_field("household_address_phone", "13957284610");
    let validation = run(&record);
    assert!(validation.findings.is_empty());
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 2);
}

#[test]
fn test_unknown_work_unit_phone_is_skipped() {
    for value in ["不详", "无"] {
        let validation = run(&with_field("work_unit_phone", value));
        assert!(validation.findings.is_empty(), "{value}");
        assert_eq!(validation.check_count, CLEAN_CHECK_COUNT);
    }
}

#[test]
fn test_work_unit_phone_checked_otherwise() {
    let validation = run(&with_field("work_unit_phone", "abc"));
    let found = findings_of(&validation, "QC004");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field_ref, "工作单位电话");
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_sequence_window_setting() {
    use mrqc_validate::{RuleEngine, RuleSettings};

    let settings = RuleSettings {
        sequence_window: 4,
        ..RuleSettings::default()
    };
    // "1234" only counts as a run with the shorter window.
    let record = with_field("contact_phone", "13912340987");
    assert!(findings_of(&run(&record), "QC005").is_empty());
    assert_eq!(
        findings_of(&RuleEngine::new(settings).validate(&record), "QC005").len(),
        1
    );
}
