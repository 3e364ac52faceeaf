//! Audit trail persistence
//!
//! [`CsvAuditTrail`] implements the [`AuditTrail`](mrqc_domain::AuditTrail)
//! port on a bounded CSV table; [`AuditStore`] builds the rows from a run and
//! keeps the last snapshot written.

pub mod csv_store;
pub mod store;

pub use csv_store::CsvAuditTrail;
pub use store::{AuditSnapshot, AuditStore};
