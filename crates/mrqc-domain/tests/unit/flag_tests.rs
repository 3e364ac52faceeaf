//! Unit tests for tri-state flags

use mrqc_domain::Flag;

#[test]
fn test_affirmative_encodings() {
    for raw in ["是", "1", "true", "True", " 1 "] {
        assert_eq!(Flag::parse(Some(raw)), Flag::Yes, "{raw}");
    }
}

#[test]
fn test_negative_encodings() {
    for raw in ["否", "0", "false", "FALSE"] {
        assert_eq!(Flag::parse(Some(raw)), Flag::No, "{raw}");
    }
}

#[test]
fn test_unknown_encodings() {
    assert_eq!(Flag::parse(None), Flag::Unknown);
    assert_eq!(Flag::parse(Some("")), Flag::Unknown);
    assert_eq!(Flag::parse(Some("-")), Flag::Unknown);
    assert_eq!(Flag::parse(Some("未知")), Flag::Unknown);
}

#[test]
fn test_autopsy_codes() {
    assert_eq!(Flag::parse_autopsy(Some("1")), Flag::Yes);
    assert_eq!(Flag::parse_autopsy(Some("是")), Flag::Yes);
    assert_eq!(Flag::parse_autopsy(Some("2")), Flag::No);
    assert_eq!(Flag::parse_autopsy(Some("否")), Flag::No);
    assert_eq!(Flag::parse_autopsy(Some("3")), Flag::Unknown);
    assert_eq!(Flag::parse_autopsy(Some("-")), Flag::Unknown);
    assert_eq!(Flag::parse_autopsy(Some("")), Flag::Unknown);
    assert_eq!(Flag::parse_autopsy(None), Flag::Unknown);
}

#[test]
fn test_flag_predicates() {
    assert!(Flag::Yes.is_yes());
    assert!(!Flag::No.is_yes());
    assert_eq!(Flag::default(), Flag::Unknown);
}
