//! Rule engine
//!
//! Runs every registered rule group over a record, in registration order,
//! and returns the findings together with the check count. Validation is
//! pure: no I/O, no shared state, identical input gives identical output.

use crate::context::CheckContext;
use crate::rules::{
    AddressRules, ConditionRules, ConsistencyRules, IdentityRules, OperationRules, PhoneRules,
    PlausibilityRules, PresenceRules, StayRules,
};
use crate::settings::RuleSettings;
use mrqc_domain::{Finding, Record};
use serde::Serialize;
use tracing::debug;

/// A cohesive set of rules evaluated together
pub trait RuleGroup: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Evaluate the group's rules, reporting into `ctx`
    fn check(&self, ctx: &mut CheckContext<'_>);
}

/// Outcome of one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validation {
    /// Findings in rule order
    pub findings: Vec<Finding>,
    /// Case identifier read back from the record
    pub case_id: String,
    /// Number of applicable rule evaluations
    pub check_count: usize,
}

impl Validation {
    /// Number of findings that count as issues
    pub fn issue_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_issue()).count()
    }
}

/// Registry of rule groups
pub struct RuleEngine {
    settings: RuleSettings,
    groups: Vec<Box<dyn RuleGroup>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleSettings::default())
    }
}

impl RuleEngine {
    /// Engine with every built-in rule group
    pub fn new(settings: RuleSettings) -> Self {
        let mut engine = Self::empty(settings);
        engine.register(PresenceRules);
        engine.register(IdentityRules);
        engine.register(PhoneRules);
        engine.register(ConsistencyRules);
        engine.register(AddressRules);
        engine.register(PlausibilityRules);
        engine.register(ConditionRules);
        engine.register(OperationRules);
        engine.register(StayRules);
        engine
    }

    /// Engine without any rule group
    pub fn empty(settings: RuleSettings) -> Self {
        Self {
            settings,
            groups: Vec::new(),
        }
    }

    /// Append a rule group; groups run in registration order
    pub fn register<G: RuleGroup + 'static>(&mut self, group: G) {
        self.groups.push(Box::new(group));
    }

    /// Names of the registered groups, in order
    pub fn group_names(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.name()).collect()
    }

    /// Settings the engine was built with
    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// Validate one record
    pub fn validate(&self, record: &Record) -> Validation {
        let mut ctx = CheckContext::new(record, &self.settings);
        for group in &self.groups {
            let before = (ctx.findings().len(), ctx.check_count());
            group.check(&mut ctx);
            debug!(
                group = group.name(),
                checks = ctx.check_count() - before.1,
                findings = ctx.findings().len() - before.0,
                "Rule group evaluated"
            );
        }

        let (findings, check_count) = ctx.finish();
        Validation {
            findings,
            case_id: record.case_id().to_string(),
            check_count,
        }
    }
}

/// Validate a record with the default settings
pub fn validate(record: &Record) -> Validation {
    RuleEngine::default().validate(record)
}
