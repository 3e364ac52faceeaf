//! Required-field presence

use crate::context::CheckContext;
use crate::engine::RuleGroup;
use mrqc_domain::label;

/// Fields that must carry a real value on every discharge record
pub const REQUIRED_FIELDS: &[&str] = &[
    // Patient identity
    "name",
    "gender",
    "id_card_number",
    "birth_date",
    "marriage_status",
    "nationality",
    "occupation",
    "current_address",
    // Contact
    "contact_name",
    "contact_relationship",
    "contact_phone",
    // TCM coding
    "tcm_outpatient_syndrome_code",
    "tcm_discharge_treatment_principle_code",
    "tcm_discharge_treatment_principle_name",
    // Staff
    "department_director",
    "chief_physician",
    "attending_physician",
    "resident_physician",
    "quality_control_physician",
    "responsible_nurse",
    "quality_control_nurse",
];

define_rules! {
    pub enum PresenceRule {
        #[rule(
            id = "QC001",
            category = Completeness,
            severity = Error,
            message = "{label} 不能为空，请补充。"
        )]
        RequiredMissing { label: String },
    }
}

/// One check per required field, whether or not it is filled in
pub struct PresenceRules;

impl RuleGroup for PresenceRules {
    fn name(&self) -> &'static str {
        "presence"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        for key in REQUIRED_FIELDS {
            ctx.charge();
            if record.is_blank(key) {
                let name = label(key).to_string();
                ctx.report(&PresenceRule::RequiredMissing {
                    field_ref: name.clone(),
                    label: name,
                });
            }
        }
    }
}
