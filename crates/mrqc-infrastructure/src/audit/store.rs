//! Audit store
//!
//! Builds the audit row of a validation run, hands it to the trail and
//! remembers what was last persisted.

use crate::audit::CsvAuditTrail;
use crate::config::AuditConfig;
use chrono::Local;
use mrqc_domain::constants::AUDIT_TIMESTAMP_FORMAT;
use mrqc_domain::error::Result;
use mrqc_domain::{AuditTrail, Finding, Record};
use mrqc_validate::build_row;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// What the last successful append persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSnapshot {
    pub record: Record,
    pub findings: Vec<Finding>,
    pub case_id: String,
}

/// Audit trail facade used by the QC service
pub struct AuditStore {
    trail: Arc<dyn AuditTrail>,
    last: Mutex<Option<AuditSnapshot>>,
}

impl AuditStore {
    /// Store over any trail implementation
    pub fn new(trail: Arc<dyn AuditTrail>) -> Self {
        Self {
            trail,
            last: Mutex::new(None),
        }
    }

    /// Store over the CSV table described by the configuration
    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(Arc::new(CsvAuditTrail::new(
            config.resolved_path(),
            config.max_records,
        )))
    }

    /// Persist one run; `false` when the write failed
    ///
    /// Failures are logged, never propagated: a validation run is complete
    /// whether or not its audit row could be written.
    pub fn append_snapshot(&self, record: &Record, findings: &[Finding], case_id: &str) -> bool {
        let run_at = Local::now().format(AUDIT_TIMESTAMP_FORMAT).to_string();
        let row = build_row(record, findings, case_id, run_at);

        match self.trail.append(&row) {
            Ok(retained) => {
                debug!(case_id = %row.case_id, retained, "Audit row appended");
                if let Ok(mut last) = self.last.lock() {
                    *last = Some(AuditSnapshot {
                        record: record.clone(),
                        findings: findings.to_vec(),
                        case_id: row.case_id,
                    });
                }
                true
            }
            Err(e) => {
                error!(case_id = %row.case_id, error = %e, "Failed to append audit row");
                false
            }
        }
    }

    /// Snapshot of the last successful append
    pub fn last_snapshot(&self) -> Option<AuditSnapshot> {
        self.last.lock().ok().and_then(|last| last.clone())
    }

    /// Persisted data rows, oldest first
    pub fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        self.trail.read_rows()
    }
}
