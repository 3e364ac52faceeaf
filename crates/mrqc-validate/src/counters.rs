//! Run counters
//!
//! Totals across the records of one run. The caller owns the value and
//! resets it when a new run starts; nothing here is shared between runs.

use crate::reporter::QcReport;
use serde::{Deserialize, Serialize};

/// Accumulated check and issue totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    total_checks: usize,
    total_issues: usize,
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Applicable rule evaluations
    pub total: usize,
    /// Evaluations that produced an issue
    pub issues: usize,
    /// `total - issues`, never negative
    pub passed: usize,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both totals
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one record's contribution
    pub fn record(&mut self, check_count: usize, issue_count: usize) {
        self.total_checks += check_count;
        self.total_issues += issue_count;
    }

    /// Add the contribution of an aggregated report
    pub fn record_report(&mut self, report: &QcReport) {
        self.record(report.check_count, report.issue_count);
    }

    pub fn get(&self) -> CounterSnapshot {
        CounterSnapshot {
            total: self.total_checks,
            issues: self.total_issues,
            passed: self.total_checks.saturating_sub(self.total_issues),
        }
    }
}
