//! Findings produced by the rule engine
//!
//! A finding names one or more form fields (by label), a severity and a
//! human-readable message. Severities are totally ordered so reports can
//! sort on them directly.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Separator between labels when a finding spans several fields
pub const FIELD_REF_SEPARATOR: char = '/';

/// Severity of a finding, highest priority first
///
/// The derived ordering places `Error` before `LogicError` before
/// `Warning` before `Notice`; sorting ascending yields report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Required information missing or malformed
    Error,
    /// Two or more fields contradict each other
    LogicError,
    /// Value looks wrong and should be verified
    Warning,
    /// Advisory only; never counted as an issue
    Notice,
}

impl Severity {
    /// Label used on the report and on the paper form
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "错误",
            Self::LogicError => "逻辑错误",
            Self::Warning => "警告",
            Self::Notice => "注意",
        }
    }

    /// Whether findings of this severity count as issues in summaries
    pub fn is_issue(self) -> bool {
        !matches!(self, Self::Notice)
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of a rule, for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Required fields are filled in
    Completeness,
    /// Values follow the expected format
    Format,
    /// Related fields agree with each other
    Logic,
    /// Values look like real data rather than filler
    Plausibility,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completeness => write!(f, "完整性"),
            Self::Format => write!(f, "规范性"),
            Self::Logic => write!(f, "逻辑性"),
            Self::Plausibility => write!(f, "合理性"),
        }
    }
}

/// One reported validation outcome
///
/// # Example
///
/// ```
/// use mrqc_domain::{Category, Finding, Severity};
///
/// let finding = Finding::new(
///     "QC010",
///     Category::Logic,
///     Severity::LogicError,
///     "婚姻状况/联系人关系",
///     "联系人关系为'配偶'，但患者婚姻状况不是'已婚'，请核实。",
/// );
///
/// assert!(finding.references("联系人关系"));
/// assert!(!finding.references("婚姻"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that produced the finding
    pub rule_id: String,
    /// Rule category
    pub category: Category,
    /// Severity of the finding
    pub severity: Severity,
    /// Field label(s), joined by `/` when several fields are involved
    pub field_ref: String,
    /// Human-readable explanation
    pub message: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        rule_id: impl Into<String>,
        category: Category,
        severity: Severity,
        field_ref: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            severity,
            field_ref: field_ref.into(),
            message: message.into(),
        }
    }

    /// Individual field labels named by this finding
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_ref.split(FIELD_REF_SEPARATOR)
    }

    /// Whether `label` is one of the fields named by this finding
    pub fn references(&self, label: &str) -> bool {
        self.fields().any(|field| field == label)
    }

    /// Whether this finding counts as an issue
    pub fn is_issue(&self) -> bool {
        self.severity.is_issue()
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "【{}】 {}: {}",
            self.severity, self.field_ref, self.message
        )
    }
}
