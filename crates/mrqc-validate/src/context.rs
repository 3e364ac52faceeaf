//! Per-run check context
//!
//! Carries the record under inspection and accumulates findings and the
//! check count while rule groups run. One context lives for exactly one
//! engine invocation.

use crate::rule::Rule;
use crate::settings::RuleSettings;
use mrqc_domain::{Finding, Record};

/// Mutable state of one validation run
pub struct CheckContext<'a> {
    record: &'a Record,
    settings: &'a RuleSettings,
    findings: Vec<Finding>,
    check_count: usize,
}

impl<'a> CheckContext<'a> {
    /// Start a run over `record`
    pub fn new(record: &'a Record, settings: &'a RuleSettings) -> Self {
        Self {
            record,
            settings,
            findings: Vec::new(),
            check_count: 0,
        }
    }

    /// The record under inspection
    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// Site-specific rule parameters
    pub fn settings(&self) -> &'a RuleSettings {
        self.settings
    }

    /// Count one applicable rule evaluation
    pub fn charge(&mut self) {
        self.check_count += 1;
    }

    /// Record a rule outcome as a finding
    pub fn report(&mut self, rule: &impl Rule) {
        self.findings.push(rule.to_finding());
    }

    /// Findings reported so far
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Applicable evaluations counted so far
    pub fn check_count(&self) -> usize {
        self.check_count
    }

    /// Consume the context, returning findings and the check count
    pub fn finish(self) -> (Vec<Finding>, usize) {
        (self.findings, self.check_count)
    }
}
