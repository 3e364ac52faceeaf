//! Addresses, zip codes and patient source

use super::field_ref;
use crate::context::CheckContext;
use crate::engine::RuleGroup;
use crate::heuristics::{is_strange_text, is_strange_zip};
use mrqc_domain::constants::UNKNOWN_VALUES;
use mrqc_domain::label;

/// Address fields with the zip field that belongs to each
const ADDRESS_FIELDS: &[(&str, Option<&str>)] = &[
    ("current_address", Some("current_address_zip")),
    ("household_address", Some("household_address_zip")),
    ("contact_address", None),
    ("work_unit_address", Some("work_unit_zip")),
];

const ADDRESS_MIN_LEN: usize = 5;
const ADDRESS_PLACEHOLDERS: &[&str] = &["测试", "地址", "同上"];

const SOURCE_DISTRICT: &[&str] = &["本区", "1"];
const SOURCE_CITY: &[&str] = &["本市", "2"];
const SOURCE_ELSEWHERE: &[&str] = &["外地", "3"];

define_rules! {
    pub enum AddressRule {
        #[rule(
            id = "QC011",
            category = Plausibility,
            severity = Notice,
            message = "地址 '{address}' 看起来过短或为通用占位符，请核实。"
        )]
        StrangeAddress { address: String },

        #[rule(
            id = "QC012",
            category = Format,
            severity = Warning,
            message = "邮编 '{zip}' 格式不正确或为简单序列，请核实。"
        )]
        StrangeZip { zip: String },

        #[rule(
            id = "QC013",
            category = Logic,
            severity = Notice,
            message = "病人来源为'本区'，但现住址'{address}'中未找到{districts}，请核实。"
        )]
        DistrictNotInAddress { address: String, districts: String },

        #[rule(
            id = "QC014",
            category = Logic,
            severity = Notice,
            message = "病人来源为'本市'，但现住址'{address}'中未找到'{city}'，请核实。"
        )]
        CityNotInAddress { address: String, city: String },

        #[rule(
            id = "QC015",
            category = Logic,
            severity = Notice,
            message = "病人来源为'外地'，但现住址'{address}'似乎是{city}地址，请核实。"
        )]
        LocalAddressForVisitor { address: String, city: String },
    }
}

pub struct AddressRules;

impl AddressRules {
    fn check_address_fields(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let window = ctx.settings().sequence_window;

        for &(address_key, zip_key) in ADDRESS_FIELDS {
            if let Some(address) = record.present(address_key) {
                ctx.charge();
                if !UNKNOWN_VALUES.contains(&address)
                    && is_strange_text(address, ADDRESS_MIN_LEN, ADDRESS_PLACEHOLDERS)
                {
                    ctx.report(&AddressRule::StrangeAddress {
                        field_ref: label(address_key).to_string(),
                        address: address.to_string(),
                    });
                }
            }

            let Some(zip_key) = zip_key else {
                continue;
            };
            let Some(zip) = record.present(zip_key) else {
                continue;
            };
            ctx.charge();
            if !UNKNOWN_VALUES.contains(&zip) && is_strange_zip(zip, window) {
                ctx.report(&AddressRule::StrangeZip {
                    field_ref: label(zip_key).to_string(),
                    zip: zip.to_string(),
                });
            }
        }
    }

    fn check_patient_source(ctx: &mut CheckContext<'_>) {
        let record = ctx.record();
        let settings = ctx.settings();
        let (Some(_), Some(address)) = (
            record.present("patient_source"),
            record.present("current_address"),
        ) else {
            return;
        };
        ctx.charge();

        let source_ref = field_ref(&["patient_source", "current_address"]);
        let in_city = settings.in_city(address);

        if record.is_one_of("patient_source", SOURCE_DISTRICT) && !settings.in_district(address) {
            ctx.report(&AddressRule::DistrictNotInAddress {
                field_ref: source_ref,
                address: address.to_string(),
                districts: settings.districts_quoted(),
            });
        } else if record.is_one_of("patient_source", SOURCE_CITY) && !in_city {
            ctx.report(&AddressRule::CityNotInAddress {
                field_ref: source_ref,
                address: address.to_string(),
                city: settings.local_city.clone(),
            });
        } else if record.is_one_of("patient_source", SOURCE_ELSEWHERE) && in_city {
            ctx.report(&AddressRule::LocalAddressForVisitor {
                field_ref: source_ref,
                address: address.to_string(),
                city: settings.local_city.clone(),
            });
        }
    }
}

impl RuleGroup for AddressRules {
    fn name(&self) -> &'static str {
        "addresses"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) {
        Self::check_address_fields(ctx);
        Self::check_patient_source(ctx);
    }
}
