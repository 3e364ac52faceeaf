//! Quality-control rules for discharge records
//!
//! This crate checks a [`Record`] for completeness, format correctness and
//! cross-field consistency:
//! - Required fields and staff signatures
//! - ID number, phone and zip formats, with filler heuristics
//! - Marriage, fee, autopsy, blood and patient-source consistency
//! - Operation surgeons and the anesthesia fee decision
//!
//! It also aggregates findings into reports, keeps per-run counters and
//! derives the audit row persisted by the infrastructure layer.
//!
//! # Example
//!
//! ```
//! use mrqc_domain::Record;
//! use mrqc_validate::{Reporter, RuleEngine};
//!
//! let record = Record::new().with_field("name", "").with_field("case_number_verify", "A1");
//! let validation = RuleEngine::default().validate(&record);
//! let report = Reporter::from_validation(&validation);
//!
//! assert_eq!(report.case_id, "A1");
//! assert!(!report.passed);
//! ```

#[macro_use]
pub mod rule_macro;
pub mod rule;

pub mod audit;
pub mod context;
pub mod counters;
pub mod engine;
pub mod heuristics;
pub mod reporter;
pub mod rules;
pub mod settings;

pub use mrqc_domain::{Category, Finding, Record, Severity};

pub use audit::{build_row, serialize_operations};
pub use context::CheckContext;
pub use counters::{CounterSnapshot, RunCounters};
pub use engine::{validate, RuleEngine, RuleGroup, Validation};
pub use reporter::{QcReport, Reporter};
pub use rule::Rule;
pub use settings::RuleSettings;
