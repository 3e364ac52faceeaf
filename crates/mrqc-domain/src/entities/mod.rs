//! Domain entities

pub mod audit;
pub mod record;

pub use audit::{AuditRow, FieldStatus};
pub use record::{OperationEntry, Record};
