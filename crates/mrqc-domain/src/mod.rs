//! # mrqc domain
//!
//! Core types for discharge-record quality control: the record model as it
//! arrives from the acquisition layer, the finding/severity model produced by
//! the rule engine, the static field catalog, and the port through which the
//! audit trail is persisted.
//!
//! This crate has no I/O and no logging; it is shared by the rule engine and
//! the infrastructure layer.

pub mod catalog;
pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use catalog::{label, FIELD_LABELS, MAIN_FIELDS, OPERATION_KEYS};
pub use entities::{AuditRow, FieldStatus, OperationEntry, Record};
pub use error::{Error, Result};
pub use ports::AuditTrail;
pub use value_objects::{Category, Finding, Flag, Severity};
