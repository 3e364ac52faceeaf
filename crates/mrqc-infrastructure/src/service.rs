//! QC service
//!
//! Sequences one record through the rule engine, the report aggregator,
//! the run counters and the audit trail.

use crate::audit::AuditStore;
use crate::config::AppConfig;
use mrqc_domain::Record;
use mrqc_validate::{CounterSnapshot, QcReport, Reporter, RuleEngine, RunCounters};
use serde::Serialize;
use tracing::{debug, info};

/// Result of checking one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QcOutcome {
    pub report: QcReport,
    /// Run totals after this record
    pub counters: CounterSnapshot,
    /// Whether an audit row was persisted
    pub saved: bool,
}

/// Quality-control service
pub struct QcService {
    engine: RuleEngine,
    store: Option<AuditStore>,
}

impl QcService {
    pub fn new(engine: RuleEngine, store: Option<AuditStore>) -> Self {
        Self { engine, store }
    }

    /// Engine configured from `[rules]`, audit store from `[audit]` when enabled
    pub fn from_config(config: &AppConfig) -> Self {
        let store = config
            .audit
            .enabled
            .then(|| AuditStore::from_config(&config.audit));
        Self::new(RuleEngine::new(config.rules.clone()), store)
    }

    /// Drop the audit store; runs are no longer persisted
    #[must_use]
    pub fn without_audit(mut self) -> Self {
        self.store = None;
        self
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn store(&self) -> Option<&AuditStore> {
        self.store.as_ref()
    }

    /// Check one record and fold it into the caller's run counters
    pub fn run(&self, record: &Record, counters: &mut RunCounters) -> QcOutcome {
        debug!(case_id = record.case_id(), "Starting QC run");

        let validation = self.engine.validate(record);
        let report = Reporter::from_validation(&validation);
        counters.record_report(&report);
        Reporter::log_report(&report);

        let saved = self.store.as_ref().is_some_and(|store| {
            store.append_snapshot(record, &validation.findings, &validation.case_id)
        });

        let snapshot = counters.get();
        info!(
            case_id = %report.case_id,
            checks = report.check_count,
            issues = report.issue_count,
            saved,
            "QC run finished"
        );

        QcOutcome {
            report,
            counters: snapshot,
            saved,
        }
    }
}
