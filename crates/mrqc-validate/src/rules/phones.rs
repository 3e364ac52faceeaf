//! Phone number format and sequence heuristics

use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::{is_simple_sequence, is_valid_phone};
use mrqc_domain::constants::UNKNOWN_VALUES;
use mrqc_domain::label;

/// Phone fields checked on every record
const PHONE_FIELDS: &[&str] = &[
    "current_address_phone",
    "contact_phone",
    "household_address_phone",
];

/// Checked unless explicitly marked unknown
const WORK_UNIT_PHONE: &str = "work_unit_phone";

define_rules! {
    pub enum PhoneRule {
        #[rule(
            id = "QC004",
            category = Format,
            severity = Warning,
            message = "电话号码 '{phone}' 格式似乎不正确，请核实。"
        )]
        MalformedPhone { phone: String },

        #[rule(
            id = "QC005",
            category = Plausibility,
            severity = Warning,
            message = "电话号码 '{phone}' 包含连续或重复数字，请核实其有效性。"
        )]
        SequentialPhone { phone: String },
    }
}

pub struct PhoneRules;

impl RuleGroup for PhoneRules {
    fn name(&self) -> &'static str {
        "phones"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let window = ctx.settings().sequence_window;

        let mut fields = PHONE_FIELDS.to_vec();
        if !record.is_one_of(WORK_UNIT_PHONE, UNKNOWN_VALUES) {
            fields.push(WORK_UNIT_PHONE);
        }

        for key in fields {
            let Some(phone) = record.present(key) else {
                continue;
            };
            ctx.charge();

            // Both checks apply independently to the same number.
            if !is_valid_phone(phone) {
                ctx.report(&PhoneRule::MalformedPhone {
                    field_ref: label(key).to_string(),
                    phone: phone.to_string(),
                });
            }
            if is_simple_sequence(phone, window) {
                ctx.report(&PhoneRule::SequentialPhone {
                    field_ref: label(key).to_string(),
                    phone: phone.to_string(),
                });
            }
        }
    }
}
