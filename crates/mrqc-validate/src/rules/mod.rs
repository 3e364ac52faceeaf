//! Rule groups
//!
//! Each module declares its rules with `define_rules!` and implements
//! [`RuleGroup`](crate::engine::RuleGroup) to evaluate them. Groups run in
//! the order the engine registers them, which is also the order findings
//! of equal severity appear in reports.

pub mod addresses;
pub mod conditions;
pub mod consistency;
pub mod identity;
pub mod operations;
pub mod phones;
pub mod plausibility;
pub mod presence;
pub mod stay;

pub use addresses::{AddressRule, AddressRules};
pub use conditions::{ConditionRule, ConditionRules};
pub use consistency::{ConsistencyRule, ConsistencyRules};
pub use identity::{IdentityRule, IdentityRules};
pub use operations::{OperationRule, OperationRules};
pub use phones::{PhoneRule, PhoneRules};
pub use plausibility::{PlausibilityRule, PlausibilityRules};
pub use presence::{PresenceRule, PresenceRules, REQUIRED_FIELDS};
pub use stay::{StayRule, StayRules};

use mrqc_domain::label;
use mrqc_domain::value_objects::finding::FIELD_REF_SEPARATOR;

/// Labels of `keys` joined into one field reference
pub(crate) fn field_ref(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| label(key))
        .collect::<Vec<_>>()
        .join(&FIELD_REF_SEPARATOR.to_string())
}
