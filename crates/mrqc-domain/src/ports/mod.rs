//! Port interfaces implemented by the infrastructure layer

pub mod audit;

pub use audit::AuditTrail;
