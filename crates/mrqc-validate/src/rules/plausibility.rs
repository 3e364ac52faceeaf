//! Filler detection on free-text person and place fields, and the coder account

use super::field_ref;
use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::is_strange_text;
use mrqc_domain::constants::UNKNOWN_VALUES;
use mrqc_domain::label;

const NAME_MIN_LEN: usize = 2;
const CONTACT_NAME_PLACEHOLDERS: &[&str] = &["无", "不详", "测试", "联系人", "家属"];
const PLACE_PLACEHOLDERS: &[&str] = &["无", "不详", "测试"];

/// Place fields checked for filler; `true` exempts the unknown markers
const PLACE_FIELDS: &[(&str, bool)] = &[
    ("birth_place", false),
    ("native_place", false),
    ("work_unit", true),
];

define_rules! {
    pub enum PlausibilityRule {
        #[rule(
            id = "QC016",
            category = Plausibility,
            severity = Notice,
            message = "联系人姓名 '{contact}' 看起来像占位符或过短，请核实。"
        )]
        StrangeContactName { contact: String },

        #[rule(
            id = "QC017",
            category = Logic,
            severity = Notice,
            message = "联系人姓名与患者本人姓名相同，请核实。"
        )]
        ContactIsPatient {},

        #[rule(
            id = "QC018",
            category = Plausibility,
            severity = Notice,
            message = "{field_label} '{value}' 看起来像占位符或过短，请核实。"
        )]
        StrangePlace { field_label: String, value: String },

        #[rule(
            id = "QC019",
            category = Plausibility,
            severity = Warning,
            message = "编码员不应是'{coder}'"
        )]
        RestrictedCoder { coder: String },
    }
}

pub struct PlausibilityRules;

impl PlausibilityRules {
    fn check_contact_name(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let Some(contact) = record.present("contact_name") else {
            return;
        };
        ctx.charge();

        if is_strange_text(contact, NAME_MIN_LEN, CONTACT_NAME_PLACEHOLDERS) {
            ctx.report(&PlausibilityRule::StrangeContactName {
                field_ref: label("contact_name").to_string(),
                contact: contact.to_string(),
            });
        } else if record.present("name") == Some(contact) {
            ctx.report(&PlausibilityRule::ContactIsPatient {
                field_ref: field_ref(&["contact_name", "name"]),
            });
        }
    }

    fn check_places(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        for &(key, exempt_unknown) in PLACE_FIELDS {
            let Some(value) = record.present(key) else {
                continue;
            };
            ctx.charge();
            if exempt_unknown && UNKNOWN_VALUES.contains(&value) {
                continue;
            }
            if is_strange_text(value, NAME_MIN_LEN, PLACE_PLACEHOLDERS) {
                ctx.report(&PlausibilityRule::StrangePlace {
                    field_ref: label(key).to_string(),
                    field_label: label(key).to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    fn check_coder(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let Some(coder) = record.present("coder") else {
            return;
        };
        ctx.charge();
        if ctx.settings().is_restricted_coder(coder) {
            ctx.report(&PlausibilityRule::RestrictedCoder {
                field_ref: label("coder").to_string(),
                coder: coder.to_string(),
            });
        }
    }
}

impl RuleGroup for PlausibilityRules {
    fn name(&self) -> &'static str {
        "plausibility"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        Self::check_contact_name(ctx);
        Self::check_places(ctx);
        Self::check_coder(ctx);
    }
}
