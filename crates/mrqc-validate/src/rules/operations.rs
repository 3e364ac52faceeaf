//! Operation entries: surgeon presence and the anesthesia decision
//!
//! The anesthesia decision looks at the whole operations list at once. An
//! entry with exactly one of method/anesthesiologist filled in is incomplete;
//! otherwise the anesthesia fee is weighed against whether any entry carries
//! anesthesia information at all.

use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::parse_amount;
use mrqc_domain::label;

/// Field-reference prefix for a single operation entry
const ENTRY_REF_PREFIX: &str = "手术及操作";

/// Field-reference label for the operations list as a whole
const OPERATIONS_REF: &str = "手术操作";

define_rules! {
    pub enum OperationRule {
        #[rule(
            id = "QC021",
            category = Completeness,
            severity = Warning,
            message = "存在手术或操作编码，但主刀医师为空，请核实。"
        )]
        SurgeonMissing {},

        #[rule(
            id = "QC022",
            category = Completeness,
            severity = Error,
            message = "有填写不完整的麻醉信息，请核实。"
        )]
        AnesthesiaIncomplete {},

        #[rule(
            id = "QC023",
            category = Completeness,
            severity = Error,
            message = "存在麻醉费用，但所有手术/操作均未填写麻醉方式或麻醉医师。"
        )]
        AnesthesiaFeeWithoutInfo {},

        #[rule(
            id = "QC024",
            category = Logic,
            severity = LogicError,
            message = "没有麻醉费用，但有手术/操作填写了麻醉信息，请核实。"
        )]
        AnesthesiaInfoWithoutFee {},

        #[rule(
            id = "QC025",
            category = Logic,
            severity = Notice,
            message = "检测到麻醉费用和对应的麻醉信息。请人工核实，确保麻醉信息填写在正确的手术/操作条目下。"
        )]
        AnesthesiaCrossCheck {},
    }
}

/// Anesthesia state gathered across all entries
#[derive(Debug, Default)]
struct AnesthesiaScan {
    any_info: bool,
    incomplete: Vec<usize>,
}

pub struct OperationRules;

impl OperationRules {
    fn entry_ref(numbers: &[usize]) -> String {
        let list = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{ENTRY_REF_PREFIX} {list}")
    }

    fn check_surgeons(ctx: &mut CheckContext<'_>) -> AnesthesiaScan {
        let record = ctx.record();
        let mut scan = AnesthesiaScan::default();

        for (index, entry) in record.operations.iter().enumerate() {
            let number = index + 1;
            if entry.has_code() {
                ctx.charge();
                if !entry.has_surgeon() {
                    ctx.report(&OperationRule::SurgeonMissing {
                        field_ref: format!(
                            "{} - {}",
                            Self::entry_ref(&[number]),
                            label("surgeon")
                        ),
                    });
                }
            }

            let method = entry.has_anesthesia_method();
            let anesthesiologist = entry.has_anesthesiologist();
            scan.any_info |= method || anesthesiologist;
            if method != anesthesiologist {
                scan.incomplete.push(number);
            }
        }
        scan
    }

    fn check_anesthesia(ctx: &mut CheckContext<'_>, scan: &AnesthesiaScan) {
        // One check for the whole decision, whichever branch applies.
        ctx.charge();

        let fee_present = ctx
            .record()
            .get("anesthesia_fee")
            .and_then(parse_amount)
            .is_some_and(|fee| fee > 0.0);
        let list_ref = format!("{}/{OPERATIONS_REF}", label("anesthesia_fee"));

        let rule = if !scan.incomplete.is_empty() {
            OperationRule::AnesthesiaIncomplete {
                field_ref: Self::entry_ref(&scan.incomplete),
            }
        } else {
            match (fee_present, scan.any_info) {
                (true, false) => OperationRule::AnesthesiaFeeWithoutInfo { field_ref: list_ref },
                (false, true) => OperationRule::AnesthesiaInfoWithoutFee { field_ref: list_ref },
                (true, true) => OperationRule::AnesthesiaCrossCheck { field_ref: list_ref },
                (false, false) => return,
            }
        };
        ctx.report(&rule);
    }
}

impl RuleGroup for OperationRules {
    fn name(&self) -> &'static str {
        "operations"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        let scan = Self::check_surgeons(ctx);
        Self::check_anesthesia(ctx, &scan);
    }
}
