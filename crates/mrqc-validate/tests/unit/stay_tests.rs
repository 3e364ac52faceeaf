//! Tests for admission count, transfer and rescue checks

use crate::test_utils::{CLEAN_CHECK_COUNT, findings_of, run, with_field};
use mrqc_domain::Severity;

#[test]
fn test_excessive_admissions_is_notice() {
    let validation = run(&with_field("admission_times", "101"));
    let found = findings_of(&validation, "QC026");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Notice);
    assert_eq!(found[0].message, "住院次数为 101 次，超过 100 次，请注意。");
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_admission_count_boundary() {
    let validation = run(&with_field("admission_times", "100"));
    assert!(validation.findings.is_empty());
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_non_numeric_admission_count_is_skipped() {
    for value in ["多次", "-", ""] {
        let validation = run(&with_field("admission_times", value));
        assert!(validation.findings.is_empty(), "{value:?}");
        assert_eq!(validation.check_count, CLEAN_CHECK_COUNT);
    }
}

#[test]
fn test_transfer_without_destination() {
    for method in ["医嘱转院", "2", "医嘱转社区"] {
        let validation = run(&with_field("discharge_method", method));
        let found = findings_of(&validation, "QC027");
        assert_eq!(found.len(), 1, "{method}");
        assert_eq!(found[0].field_ref, "离院方式");
        assert_eq!(found[0].severity, Severity::Warning);
    }
}

#[test]
fn test_transfer_with_either_destination() {
    let hospital = with_field("discharge_method", "2")
        .with_field("transferring_institution", "上海市第六人民医院");
    assert!(run(&hospital).findings.is_empty());

    let community = with_field("discharge_method", "医嘱转社区")
        .with_field("transferring_institution_Community", "漕河泾社区卫生服务中心");
    let validation = run(&community);
    assert!(validation.findings.is_empty());
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_rescue_without_severity_flags() {
    let validation = run(&with_field("rescue_times", "2"));
    let found = findings_of(&validation, "QC028");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::LogicError);
    assert_eq!(
        found[0].field_ref,
        "抢救次数/住院期间是否出现危重/住院期间是否出现急症"
    );
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_rescue_with_severity_flag() {
    for (key, value) in [
        ("critical_condition", "是"),
        ("critical_condition", "1"),
        ("emergency_case", "true"),
        ("emergency_case", "True"),
    ] {
        let record = with_field("rescue_times", "1").with_field(key, value);
        assert!(run(&record).findings.is_empty(), "{key}={value}");
    }
}

#[test]
fn test_zero_or_unparseable_rescues_are_skipped() {
    for value in ["0", "无", "一次"] {
        let validation = run(&with_field("rescue_times", value));
        assert!(validation.findings.is_empty(), "{value}");
        assert_eq!(validation.check_count, CLEAN_CHECK_COUNT);
    }
}
