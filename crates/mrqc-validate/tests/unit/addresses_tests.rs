//! Tests for address, zip and patient-source checks

use crate::test_utils::{CLEAN_CHECK_COUNT, findings_of, run, with_field};
use mrqc_domain::Severity;
use mrqc_validate::{RuleEngine, RuleSettings};

#[test]
fn test_placeholder_address_is_notice() {
    let validation = run(&with_field("household_address", "同上"));
    let found = findings_of(&validation, "QC011");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Notice);
    assert_eq!(found[0].field_ref, "户口地址");
    assert_eq!(found[0].message, "地址 '同上' 看起来过短或为通用占位符，请核实。");
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_short_contact_address_is_notice() {
    let validation = run(&with_field("contact_address", "浦东"));
    assert_eq!(findings_of(&validation, "QC011").len(), 1);
}

#[test]
fn test_unknown_address_is_exempt_but_counted() {
    let validation = run(&with_field("work_unit_address", "不详"));
    assert!(validation.findings.is_empty());
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
}

#[test]
fn test_sequential_zip_warns() {
    let validation = run(&with_field("current_address_zip", "123456"));
    let found = findings_of(&validation, "QC012");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Warning);
    assert_eq!(found[0].field_ref, "现住址邮编");
    assert_eq!(found[0].message, "邮编 '123456' 格式不正确或为简单序列，请核实。");
}

#[test]
fn test_valid_and_unknown_zips_pass() {
    for zip in ["200030", "不详", "无"] {
        let validation = run(&with_field("household_address_zip", zip));
        assert!(validation.findings.is_empty(), "{zip}");
        assert_eq!(validation.check_count, CLEAN_CHECK_COUNT + 1);
    }
}

#[test]
fn test_zip_checked_without_its_address() {
    let validation = run(&with_field("work_unit_zip", "2000"));
    let found = findings_of(&validation, "QC012");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field_ref, "工作单位邮编");
}

#[test]
fn test_local_district_source_outside_district() {
    let validation = run(&with_field("current_address", "上海市静安区南京西路1号"));
    let found = findings_of(&validation, "QC013");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field_ref, "病人来源/现住址");
    assert_eq!(
        found[0].message,
        "病人来源为'本区'，但现住址'上海市静安区南京西路1号'中未找到'徐汇'或'浦东'，请核实。"
    );
}

#[test]
fn test_city_source_outside_city() {
    let record = with_field("patient_source", "本市")
        .with_field("current_address", "北京市海淀区中关村大街1号");
    let validation = run(&record);
    let found = findings_of(&validation, "QC014");
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].message,
        "病人来源为'本市'，但现住址'北京市海淀区中关村大街1号'中未找到'上海'，请核实。"
    );
}

#[test]
fn test_visitor_source_with_local_address() {
    let validation = run(&with_field("patient_source", "3"));
    let found = findings_of(&validation, "QC015");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Notice);
    assert_eq!(
        found[0].message,
        "病人来源为'外地'，但现住址'上海市徐汇区漕溪北路100号'似乎是上海地址，请核实。"
    );
}

#[test]
fn test_matching_sources_pass() {
    let city = with_field("patient_source", "2");
    assert!(run(&city).findings.is_empty());

    let visitor = with_field("patient_source", "外地")
        .with_field("current_address", "江苏省苏州市姑苏区人民路1号");
    assert!(run(&visitor).findings.is_empty());
}

#[test]
fn test_source_without_address_is_not_checked() {
    let validation = run(&with_field("patient_source", ""));
    assert!(validation.findings.is_empty());
    assert_eq!(validation.check_count, CLEAN_CHECK_COUNT - 1);
}

#[test]
fn test_site_keywords_from_settings() {
    let settings = RuleSettings {
        local_city: "杭州".to_string(),
        local_districts: vec!["西湖".to_string()],
        ..RuleSettings::default()
    };
    let record = with_field("current_address", "杭州市西湖区文三路1号");
    let validation = RuleEngine::new(settings).validate(&record);
    assert!(validation.findings.is_empty());
}
