//! Configuration management
//!
//! Layered configuration via Figment: defaults, an optional `mrqc.toml`,
//! then `MRQC_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuditConfig, LoggingConfig};
