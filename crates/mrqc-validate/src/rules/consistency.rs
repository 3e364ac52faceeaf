//! Cross-field consistency
//!
//! Marriage status against the contact relationship, charged fees against
//! their usage flags, death against the autopsy field and blood fees against
//! blood typing.

use super::field_ref;
use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::{format_amount, parse_number};
use mrqc_domain::{Flag, label};

const SPOUSE: &[&str] = &["配偶", "2"];
const MARRIED: &[&str] = &["已婚", "2"];
const UNMARRIED: &[&str] = &["未婚", "1"];
const DECEASED: &[&str] = &["死亡", "5"];

/// Blood type values meaning "not tested"
const BLOOD_TYPE_UNTESTED: &[&str] = &["", "-", "未查", "6"];
/// Rh values meaning "not tested"
const RH_UNTESTED: &[&str] = &["", "-", "未查", "4"];

/// Fee fields paired with the flag that must be set when they are charged
const FEE_USAGE_PAIRS: &[(&str, &str)] = &[
    ("tcm_preparation_fee", "tcm_preparation_usage"),
    ("tcm_treatment_fee", "tcm_technique_usage"),
];

define_rules! {
    pub enum ConsistencyRule {
        #[rule(
            id = "QC006",
            category = Logic,
            severity = LogicError,
            message = "联系人关系为'配偶'，但患者婚姻状况不是'已婚'，请核实。"
        )]
        SpouseButNotMarried {},

        #[rule(
            id = "QC007",
            category = Logic,
            severity = LogicError,
            message = "患者婚姻状况为'未婚'，但联系人关系为'配偶'，请核实。"
        )]
        UnmarriedWithSpouse {},

        #[rule(
            id = "QC008",
            category = Logic,
            severity = LogicError,
            message = "有'{fee_label}'({fee})，但'{usage_label}'不为'是'。"
        )]
        FeeWithoutUsage {
            fee_label: String,
            fee: String,
            usage_label: String,
        },

        #[rule(
            id = "QC009",
            category = Logic,
            severity = LogicError,
            message = "离院方式为'死亡'，但'死亡患者尸检'状态未明确填写为'是'或'否'。"
        )]
        AutopsyUnanswered {},

        #[rule(
            id = "QC010",
            category = Logic,
            severity = LogicError,
            message = "有'血费'产生，但 {untested} 信息为'未查'或空。"
        )]
        BloodFeeWithoutTyping { untested: String },
    }
}

pub struct ConsistencyRules;

impl ConsistencyRules {
    fn check_marriage(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let marriage_ref = field_ref(&["marriage_status", "contact_relationship"]);

        if record.is_one_of("contact_relationship", SPOUSE) {
            ctx.charge();
            if record.present("marriage_status").is_some()
                && !record.is_one_of("marriage_status", MARRIED)
            {
                ctx.report(&ConsistencyRule::SpouseButNotMarried {
                    field_ref: marriage_ref.clone(),
                });
            }
        }

        if record.is_one_of("marriage_status", UNMARRIED) {
            ctx.charge();
            if record.is_one_of("contact_relationship", SPOUSE) {
                ctx.report(&ConsistencyRule::UnmarriedWithSpouse {
                    field_ref: marriage_ref,
                });
            }
        }
    }

    fn check_fees(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        for &(fee_key, usage_key) in FEE_USAGE_PAIRS {
            let Some(fee) = record.present(fee_key).and_then(parse_number) else {
                continue;
            };
            ctx.charge();
            if fee > 0.0 && !record.flag(usage_key).is_yes() {
                ctx.report(&ConsistencyRule::FeeWithoutUsage {
                    field_ref: field_ref(&[fee_key, usage_key]),
                    fee_label: label(fee_key).to_string(),
                    fee: format_amount(fee),
                    usage_label: label(usage_key).to_string(),
                });
            }
        }
    }

    fn check_autopsy(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        if !record.is_one_of("discharge_method", DECEASED) {
            return;
        }
        ctx.charge();
        if Flag::parse_autopsy(record.get("autopsy")) == Flag::Unknown {
            ctx.report(&ConsistencyRule::AutopsyUnanswered {
                field_ref: field_ref(&["discharge_method", "autopsy"]),
            });
        }
    }

    fn check_blood(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let Some(fee) = record.present("blood_fee").and_then(parse_number) else {
            return;
        };
        ctx.charge();
        if fee <= 0.0 {
            return;
        }

        let untested = |key: &str, values: &[&str]| {
            record.get(key).is_none_or(|v| values.contains(&v))
        };
        let mut invalid = Vec::new();
        if untested("blood_type", BLOOD_TYPE_UNTESTED) {
            invalid.push(label("blood_type"));
        }
        if untested("rh", RH_UNTESTED) {
            invalid.push(label("rh"));
        }
        if invalid.is_empty() {
            return;
        }

        ctx.report(&ConsistencyRule::BloodFeeWithoutTyping {
            field_ref: format!("{}/{}", label("blood_fee"), invalid.join("/")),
            untested: invalid.join(" 和 "),
        });
    }
}

impl RuleGroup for ConsistencyRules {
    fn name(&self) -> &'static str {
        "consistency"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        Self::check_marriage(ctx);
        Self::check_fees(ctx);
        Self::check_autopsy(ctx);
        Self::check_blood(ctx);
    }
}
