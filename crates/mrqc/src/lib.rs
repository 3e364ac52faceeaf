//! # mrqc
//!
//! Quality control for hospital discharge records ("病案首页").
//!
//! A record captured from the hospital information system is checked for
//! completeness, format correctness and cross-field consistency. The result
//! is a report of findings ranked by severity, a run-wide tally of checks and
//! issues, and one row in a bounded audit table.
//!
//! ## Example
//!
//! ```
//! use mrqc::{QcService, Record, RuleEngine, RunCounters};
//!
//! let service = QcService::new(RuleEngine::default(), None);
//! let record = Record::from_json(r#"{"name": "", "case_number_verify": "A1"}"#).unwrap();
//!
//! let mut counters = RunCounters::new();
//! let outcome = service.run(&record, &mut counters);
//! assert!(!outcome.report.passed);
//! assert!(!outcome.saved);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - record model, findings, field catalog, audit port
//! - `validate` - rule engine, report aggregation, run counters
//! - `infrastructure` - configuration, logging, CSV audit trail, service
//! - `cli` - the `mrqc` command line

/// Domain layer - record model, findings and field catalog
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mrqc_domain::*;
}

/// Rule engine and report aggregation
///
/// Re-exports from the validate crate for convenience
pub mod validate {
    pub use mrqc_validate::*;
}

/// Infrastructure layer - config, logging, audit trail and service
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mrqc_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use infrastructure::{AppConfig, AuditStore, ConfigLoader, QcOutcome, QcService};
pub use validate::{QcReport, Reporter, RuleEngine, RunCounters};
