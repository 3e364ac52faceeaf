//! Configuration types

use crate::constants::{AUDIT_FILENAME, DEFAULT_CONFIG_DIR, DEFAULT_LOG_LEVEL};
use mrqc_domain::constants::AUDIT_MAX_RECORDS;
use mrqc_validate::RuleSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Audit trail configuration
    pub audit: AuditConfig,
    /// Site-specific rule parameters
    pub rules: RuleSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Persist a row per validation run
    pub enabled: bool,
    /// Location of the audit table; the platform data directory when unset
    pub path: Option<PathBuf>,
    /// Rows retained, oldest dropped first
    pub max_records: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            max_records: AUDIT_MAX_RECORDS,
        }
    }
}

impl AuditConfig {
    /// Effective location of the audit table
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(DEFAULT_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
            .join(AUDIT_FILENAME)
    }
}
