//! Domain layer constants
//!
//! Values that are part of the quality-control rules themselves. Settings an
//! operator may want to change live in the infrastructure configuration and
//! only default to the values below.

// ============================================================================
// RECORD CONTRACT
// ============================================================================

/// Key of the nested operations list inside a record
pub const OPERATIONS_KEY: &str = "operations";

/// Key holding the case number read back for verification
pub const CASE_NUMBER_KEY: &str = "case_number_verify";

/// Values the acquisition layer uses for "nothing entered"
pub const BLANK_PLACEHOLDERS: &[&str] = &["", "-", "无"];

/// Values meaning the information is explicitly unknown
pub const UNKNOWN_VALUES: &[&str] = &["不详", "无"];

// ============================================================================
// HEURISTIC DEFAULTS
// ============================================================================

/// Window length for the simple-sequence heuristic
pub const SEQUENCE_WINDOW: usize = 6;

/// Placeholders assumed by the strange-text heuristic when none are given
pub const DEFAULT_TEXT_PLACEHOLDERS: &[&str] = &["测试", "未知"];

/// Admission counts above this are flagged for attention
pub const ADMISSION_TIMES_LIMIT: f64 = 100.0;

// ============================================================================
// AUDIT TRAIL
// ============================================================================

/// Retention window of the audit table
pub const AUDIT_MAX_RECORDS: usize = 5000;

/// Header of the case identifier column
pub const AUDIT_CASE_ID_HEADER: &str = "病案号";

/// Header of the run timestamp column
pub const AUDIT_TIMESTAMP_HEADER: &str = "运行日期";

/// Suffix appended to a field label for its status column
pub const AUDIT_STATUS_SUFFIX: &str = "质控";

/// Header of the serialized operations column
pub const AUDIT_OPERATIONS_HEADER: &str = "手术操作";

/// Header of the operations status column
pub const AUDIT_OPERATIONS_STATUS_HEADER: &str = "手术操作质控";

/// Format of the run timestamp column
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Field-reference fragments that attribute a finding to the operations list
pub const OPERATION_REF_MARKERS: &[&str] = &["手术", "操作"];
