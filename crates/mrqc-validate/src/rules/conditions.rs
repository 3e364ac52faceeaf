//! Admission condition recorded on the discharge diagnoses

use crate::context::CheckContext;
use crate::engine::RuleGroup;
use mrqc_domain::label;

/// Western and TCM admission-condition fields
const CONDITION_FIELDS: &[&str] = &["admission_condition", "tcm_discharge_condition"];

/// A condition must be coded; the literal "none" is not a condition
const NO_CONDITION: &str = "无";

define_rules! {
    pub enum ConditionRule {
        #[rule(
            id = "QC020",
            category = Format,
            severity = Error,
            message = "{condition_label}不应为'无'，请核实"
        )]
        NoneAsCondition { condition_label: String },
    }
}

pub struct ConditionRules;

impl RuleGroup for ConditionRules {
    fn name(&self) -> &'static str {
        "conditions"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        for key in CONDITION_FIELDS {
            let Some(condition) = record.present(key) else {
                continue;
            };
            ctx.charge();
            if condition == NO_CONDITION {
                ctx.report(&ConditionRule::NoneAsCondition {
                    field_ref: label(key).to_string(),
                    condition_label: label(key).to_string(),
                });
            }
        }
    }
}
