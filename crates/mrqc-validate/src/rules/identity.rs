//! Nationality and ID number format

use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::is_valid_id_number;
use mrqc_domain::label;

/// Nationality values meaning China (name or GB/T 2659 code)
const DOMESTIC_NATIONALITY: &[&str] = &["中国", "156"];

define_rules! {
    pub enum IdentityRule {
        #[rule(
            id = "QC002",
            category = Plausibility,
            severity = Warning,
            message = "国籍为 '{nationality}'，不是'中国'，请核实。"
        )]
        ForeignNationality { nationality: String },

        #[rule(
            id = "QC003",
            category = Format,
            severity = Error,
            message = "身份证号 '{id_number}' 格式不正确，应为18位。"
        )]
        MalformedIdNumber { id_number: String },
    }
}

pub struct IdentityRules;

impl RuleGroup for IdentityRules {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        let record = ctx.record();

        if let Some(nationality) = record.present("nationality") {
            ctx.charge();
            if !DOMESTIC_NATIONALITY.contains(&nationality) {
                ctx.report(&IdentityRule::ForeignNationality {
                    field_ref: label("nationality").to_string(),
                    nationality: nationality.to_string(),
                });
            }
        }

        if let Some(id_number) = record.present("id_card_number") {
            ctx.charge();
            if !is_valid_id_number(id_number) {
                ctx.report(&IdentityRule::MalformedIdNumber {
                    field_ref: label("id_card_number").to_string(),
                    id_number: id_number.to_string(),
                });
            }
        }
    }
}
