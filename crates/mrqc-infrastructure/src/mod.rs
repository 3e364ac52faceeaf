//! # Infrastructure Layer
//!
//! Technical concerns around the rule engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, `mrqc.toml`, `MRQC_` environment |
//! | [`constants`] | Infrastructure constants |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`logging`] | Structured logging with tracing |
//! | [`audit`] | Bounded CSV audit trail |
//! | [`service`] | Validate, aggregate, count and persist one record |

pub mod audit;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod service;

pub use audit::{AuditSnapshot, AuditStore, CsvAuditTrail};
pub use config::{AppConfig, AuditConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use service::{QcOutcome, QcService};
