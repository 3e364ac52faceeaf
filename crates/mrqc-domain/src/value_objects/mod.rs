//! Value objects shared by the rule engine and its consumers

pub mod finding;
pub mod flag;

pub use finding::{Category, Finding, Severity, FIELD_REF_SEPARATOR};
pub use flag::Flag;
