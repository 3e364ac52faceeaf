//! Hospital stay: admission count, transfer destination and rescues

use super::field_ref;
use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::parse_number;
use mrqc_domain::constants::ADMISSION_TIMES_LIMIT;
use mrqc_domain::label;

/// Discharge methods that send the patient to another institution
const TRANSFER_METHODS: &[&str] = &["医嘱转院", "2", "医嘱转社区"];

const TRANSFER_DESTINATIONS: &[&str] =
    &["transferring_institution", "transferring_institution_Community"];

define_rules! {
    pub enum StayRule {
        #[rule(
            id = "QC026",
            category = Plausibility,
            severity = Notice,
            message = "住院次数为 {times} 次，超过 100 次，请注意。"
        )]
        ExcessiveAdmissions { times: String },

        #[rule(
            id = "QC027",
            category = Completeness,
            severity = Warning,
            message = "离院方式为'医嘱转院'，但无填写内容，请核实。"
        )]
        TransferDestinationMissing {},

        #[rule(
            id = "QC028",
            category = Logic,
            severity = LogicError,
            message = "记录有抢救次数，但“是否危重”与“是否急症”均未标识为是，请核实。"
        )]
        RescueWithoutSeverity {},
    }
}

pub struct StayRules;

impl StayRules {
    fn check_admission_times(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let Some(raw) = record.get("admission_times") else {
            return;
        };
        let Some(times) = parse_number(raw) else {
            return;
        };
        ctx.charge();
        if times > ADMISSION_TIMES_LIMIT {
            ctx.report(&StayRule::ExcessiveAdmissions {
                field_ref: label("admission_times").to_string(),
                times: raw.to_string(),
            });
        }
    }

    fn check_transfer(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        if !record.is_one_of("discharge_method", TRANSFER_METHODS) {
            return;
        }
        ctx.charge();
        if TRANSFER_DESTINATIONS
            .iter()
            .all(|key| record.present(key).is_none())
        {
            ctx.report(&StayRule::TransferDestinationMissing {
                field_ref: label("discharge_method").to_string(),
            });
        }
    }

    fn check_rescues(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let rescues = record
            .get("rescue_times")
            .and_then(parse_number)
            .unwrap_or(0.0);
        if rescues <= 0.0 {
            return;
        }
        ctx.charge();
        if !record.flag("critical_condition").is_yes() && !record.flag("emergency_case").is_yes() {
            ctx.report(&StayRule::RescueWithoutSeverity {
                field_ref: field_ref(&["rescue_times", "critical_condition", "emergency_case"]),
            });
        }
    }
}

impl RuleGroup for StayRules {
    fn name(&self) -> &'static str {
        "stay"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        Self::check_admission_times(ctx);
        Self::check_transfer(ctx);
        Self::check_rescues(ctx);
    }
}
