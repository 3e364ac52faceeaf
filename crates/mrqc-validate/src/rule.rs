//! Rule Trait
//!
//! Common interface of every rule outcome, so rule groups can report
//! through one path regardless of which enum declared the rule.

use crate::{Category, Finding, Severity};
use std::fmt::Display;

/// A concrete rule outcome, ready to be reported
pub trait Rule: Display {
    /// Stable rule identifier (e.g. "QC001")
    fn id(&self) -> &'static str;

    /// Category for grouping in reports
    fn category(&self) -> Category;

    /// Severity of the outcome
    fn severity(&self) -> Severity;

    /// Field label(s) the outcome refers to
    fn field_ref(&self) -> &str;

    /// Human-readable message
    fn message(&self) -> String {
        self.to_string()
    }

    /// Convert into the reported finding
    fn to_finding(&self) -> Finding {
        Finding::new(
            self.id(),
            self.category(),
            self.severity(),
            self.field_ref(),
            self.message(),
        )
    }
}
