//! Audit row derivation
//!
//! Flattens a record and its findings into an [`AuditRow`]. A field fails
//! when any finding names its label; otherwise it passes when some rule
//! looks at it, and is reported as not checked when none does.

use crate::rules::REQUIRED_FIELDS;
use mrqc_domain::constants::{OPERATIONS_KEY, OPERATION_REF_MARKERS};
use mrqc_domain::{AuditRow, FieldStatus, Finding, OperationEntry, Record, MAIN_FIELDS, label};
use std::collections::HashSet;

/// Fields inspected by some rule besides the required ones
const INSPECTED_FIELDS: &[&str] = &[
    // Format and logic checks
    "current_address_phone",
    "household_address_phone",
    "work_unit_phone",
    "tcm_preparation_fee",
    "tcm_preparation_usage",
    "tcm_treatment_fee",
    "tcm_technique_usage",
    "discharge_method",
    "autopsy",
    "blood_fee",
    "blood_type",
    "rh",
    "current_address_zip",
    "household_address_zip",
    "work_unit_zip",
    "patient_source",
    "coder",
    "admission_condition",
    "tcm_discharge_condition",
    "anesthesia_fee",
    "admission_times",
    "rescue_times",
    "critical_condition",
    "emergency_case",
    "birth_place",
    "native_place",
    "work_unit",
    "transferring_institution",
    "transferring_institution_Community",
    // Addresses
    "current_address",
    "household_address",
    "contact_address",
    "work_unit_address",
    // The operations list as a whole
    OPERATIONS_KEY,
];

/// Whether a field key (or `operations`) is looked at by some rule
pub fn is_checked(key: &str) -> bool {
    REQUIRED_FIELDS.contains(&key) || INSPECTED_FIELDS.contains(&key)
}

/// Every label named by any finding
fn failed_labels(findings: &[Finding]) -> HashSet<&str> {
    findings.iter().flat_map(Finding::fields).collect()
}

fn status(failed: bool, checked: bool) -> FieldStatus {
    if failed {
        FieldStatus::Failed
    } else if checked {
        FieldStatus::Passed
    } else {
        FieldStatus::NotChecked
    }
}

/// Status of one field given the run's findings
pub fn field_status(key: &str, findings: &[Finding]) -> FieldStatus {
    let failed = findings.iter().any(|f| f.references(label(key)));
    status(failed, is_checked(key))
}

/// Status of the operations list given the run's findings
pub fn operations_status(findings: &[Finding]) -> FieldStatus {
    let failed = findings
        .iter()
        .flat_map(Finding::fields)
        .any(|field| OPERATION_REF_MARKERS.iter().any(|m| field.contains(m)));
    status(failed, is_checked(OPERATIONS_KEY))
}

/// Pack the operations list into one cell: `[(label:value,...),(...)]`
///
/// Only supplied fields are written. An empty list gives an empty cell.
///
/// # Example
///
/// ```
/// use mrqc_domain::OperationEntry;
/// use mrqc_validate::audit::serialize_operations;
///
/// let entry = OperationEntry {
///     operation_code: Some("A1".to_string()),
///     surgeon: Some("王医生".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(serialize_operations(&[entry]), "[(手术及操作编码:A1,主刀医师:王医生)]");
/// assert_eq!(serialize_operations(&[]), "");
/// ```
pub fn serialize_operations(operations: &[OperationEntry]) -> String {
    if operations.is_empty() {
        return String::new();
    }

    let groups: Vec<String> = operations
        .iter()
        .map(|entry| {
            let parts: Vec<String> = entry
                .entries()
                .into_iter()
                .map(|(key, value)| format!("{}:{value}", label(key)))
                .collect();
            format!("({})", parts.join(","))
        })
        .collect();
    format!("[{}]", groups.join(","))
}

/// Build the audit row of one run
///
/// `case_id` falls back to the case number read back from the record when
/// empty. `run_at` is the already formatted run timestamp.
pub fn build_row(record: &Record, findings: &[Finding], case_id: &str, run_at: String) -> AuditRow {
    let failed = failed_labels(findings);
    let fields = MAIN_FIELDS
        .iter()
        .map(|key| {
            let value = record.get(key).unwrap_or_default().to_string();
            (value, status(failed.contains(label(key)), is_checked(key)))
        })
        .collect();

    let case_id = if case_id.is_empty() {
        record.case_id()
    } else {
        case_id
    };

    AuditRow {
        case_id: case_id.to_string(),
        run_at,
        fields,
        operations: serialize_operations(&record.operations),
        operations_status: operations_status(findings),
    }
}
