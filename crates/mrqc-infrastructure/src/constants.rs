//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Rule-level constants are defined in `mrqc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mrqc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mrqc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MRQC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "MRQC_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used for the rolling log when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "mrqc";

// ============================================================================
// AUDIT TRAIL CONSTANTS
// ============================================================================

/// File name of the audit table inside the data directory
pub const AUDIT_FILENAME: &str = "records.csv";

/// Extension of the sidecar file locked while the table is rewritten
pub const AUDIT_LOCK_EXTENSION: &str = "lock";

/// Byte order mark written at the start of the audit table
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
