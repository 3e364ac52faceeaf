//! Field catalog
//!
//! Static lookup from internal field key to the label shown on the discharge
//! form. Labels name findings, audit columns and the operations cell; keys
//! without a label fall back to the key itself.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Key/label pairs in form order
const LABEL_TABLE: &[(&str, &str)] = &[
    // Basic information
    ("name", "姓名"),
    ("gender", "性别"),
    ("birth_date", "出生日期"),
    ("marriage_status", "婚姻状况"),
    ("birth_place", "出生地"),
    ("native_place", "籍贯"),
    ("nationality", "国籍"),
    ("ethnicity", "民族"),
    ("occupation", "职业"),
    ("id_card_type_code", "身份证类别代码"),
    ("id_card_number", "身份证号"),
    ("patient_source", "病人来源"),
    // Addresses and contact
    ("current_address", "现住址"),
    ("current_address_phone", "现住址电话"),
    ("current_address_zip", "现住址邮编"),
    ("household_address", "户口地址"),
    ("household_address_zip", "户口地址邮编"),
    ("household_address_phone", "户口地址电话"),
    ("work_unit", "工作单位"),
    ("work_unit_address", "工作单位地址"),
    ("work_unit_phone", "工作单位电话"),
    ("work_unit_zip", "工作单位邮编"),
    ("contact_name", "联系人姓名"),
    ("contact_relationship", "联系人关系"),
    ("contact_address", "联系人地址"),
    ("contact_phone", "联系人电话"),
    // Admission and discharge
    ("treatment_type", "治疗类别"),
    ("admission_path", "入院途径"),
    ("discharge_method", "离院方式"),
    ("readmission_plan", "是否有出院31天再住院计划"),
    ("readmission_purpose", "再住院目的"),
    ("transferring_institution", "医嘱转院接收机构"),
    ("transferring_institution_Community", "医嘱转社区接收机构"),
    // TCM treatment features
    ("tcm_preparation_usage", "使用医疗机构中药制剂"),
    ("clinical_pathway", "实施临床路径"),
    ("tcm_equipment_usage", "使用中医诊疗设备"),
    ("tcm_technique_usage", "使用中医诊疗技术"),
    ("tcm_nursing", "辨证施护"),
    // TCM diagnoses
    ("tcm_outpatient_disease_name", "中医门诊诊断疾病名称"),
    ("tcm_outpatient_disease_code", "中医门诊诊断疾病编码"),
    ("tcm_outpatient_syndrome_name", "中医门诊诊断症候名称"),
    ("tcm_outpatient_syndrome_code", "中医门诊诊断症候编码"),
    ("tcm_outpatient_traditional_medicine_name", "门诊传统医学名称"),
    ("tcm_outpatient_traditional_medicine_code", "门诊传统医学编码"),
    ("tcm_discharge_main_disease_name", "出院中医诊断主病名称"),
    ("tcm_discharge_main_disease_code", "出院中医诊断主病编码"),
    ("tcm_discharge_main_syndrome_name", "出院中医诊断主证名称"),
    ("tcm_discharge_main_syndrome_code", "出院中医诊断主证编码"),
    ("tcm_discharge_condition", "出院中医诊断入院病情"),
    ("tcm_discharge_status", "出院中医诊断出院情况"),
    ("tcm_discharge_treatment_principle_code", "出院治则治法编码"),
    ("tcm_discharge_treatment_principle_name", "出院治则治法名称"),
    ("tcm_discharge_traditional_medicine_code", "出院传统医学编码"),
    ("tcm_discharge_traditional_medicine_name", "出院传统医学名称"),
    // Western diagnoses
    ("outpatient_disease_name", "门诊诊断疾病名称"),
    ("outpatient_disease_code", "门诊诊断疾病编码"),
    ("admission_disease_name", "入院诊断疾病名称"),
    ("admission_disease_code", "入院诊断疾病编码"),
    ("discharge_disease_name", "出院西医主要诊断疾病名称"),
    ("discharge_disease_code", "出院西医主要诊断疾病编码"),
    ("admission_condition", "出院西医主要诊断入院病情"),
    ("discharge_status", "出院西医主要诊断出院情况"),
    ("discharge_tumor_name", "出院西医主要诊断肿瘤名称"),
    ("discharge_tumor_code", "出院西医主要诊断肿瘤编码"),
    // Pathology and injury
    ("pathology_disease_name", "病理诊断疾病名称"),
    ("pathology_disease_code", "病理诊断疾病编码"),
    ("pathology_number", "病理号"),
    ("injury_poison_code", "损伤中毒外因疾病编码"),
    // Allergy, autopsy, diagnosis consistency
    ("autopsy", "死亡患者尸检"),
    ("drug_allergy", "药物过敏"),
    ("allergy_drug1", "过敏药物1"),
    ("allergy_drug2", "过敏药物2"),
    ("allergy_drug3", "过敏药物3"),
    ("diagnosis_consistency_outpatient", "诊断符合情况门诊与出院"),
    ("diagnosis_consistency_admission", "诊断符合情况入院与出院"),
    ("diagnosis_consistency_operation", "诊断符合情况术前与术后"),
    // Blood, transfusion, pregnancy
    ("blood_type", "血型"),
    ("rh", "RH"),
    ("blood_transfusion_reaction", "输血反应"),
    ("syphilis_screening_pregnancy", "妊娠梅毒筛查"),
    ("postpartum_hemorrhage", "产后出血"),
    // Staff and quality control
    ("department_director", "科主任"),
    ("chief_physician", "主任医师"),
    ("attending_physician", "主治医师"),
    ("resident_physician", "住院医师"),
    ("visiting_physician", "进修医师"),
    ("intern_physician", "实习医师"),
    ("responsible_nurse", "责任护士"),
    ("quality_control_physician", "质控医师"),
    ("quality_control_nurse", "质控护士"),
    ("coder", "编码员"),
    ("case_quality", "病案质量"),
    ("quality_control_date", "质控日期"),
    // Operation entries
    ("operation_code", "手术及操作编码"),
    ("operation_name", "手术及操作名称"),
    ("operation_date", "手术及操作日期"),
    ("operation_level", "手术级别"),
    ("surgeon", "主刀医师"),
    ("first_assistant", "一助"),
    ("second_assistant", "二助"),
    ("incision_healing", "切口/愈合"),
    ("anesthesia_method", "麻醉方式"),
    ("anesthesiologist", "麻醉医师"),
    ("operation_department", "手术科室"),
    ("is_dsa", "是否DSA下造影"),
    ("is_operation", "操作是否算手术人次"),
    // Hospital stay
    ("critical_condition", "住院期间是否出现危重"),
    ("difficult_case", "住院期间是否出现疑难"),
    ("emergency_case", "住院期间是否出现急症"),
    ("hospital_infection", "住院期间是否出现医院感染"),
    ("blood_transfusion", "住院期间是否输血"),
    // Rescue
    ("rescue_times", "抢救次数"),
    ("rescue_success", "成功次数"),
    // Fees and counts
    ("blood_fee", "血费"),
    ("tcm_treatment_fee", "中医治疗费"),
    ("tcm_preparation_fee", "医疗机构中药制剂费"),
    ("anesthesia_fee", "麻醉费用"),
    ("admission_times", "住院次数"),
];

/// Label lookup table, built once per process
pub static FIELD_LABELS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LABEL_TABLE.iter().copied().collect());

/// Keys of one operation entry, in acquisition order
pub const OPERATION_KEYS: [&str; 13] = [
    "operation_code",
    "operation_name",
    "operation_date",
    "operation_level",
    "surgeon",
    "first_assistant",
    "second_assistant",
    "incision_healing",
    "anesthesia_method",
    "anesthesiologist",
    "operation_department",
    "is_dsa",
    "is_operation",
];

/// Flat record fields persisted in the audit table, in column order
pub const MAIN_FIELDS: &[&str] = &[
    "name",
    "gender",
    "birth_date",
    "marriage_status",
    "birth_place",
    "native_place",
    "nationality",
    "ethnicity",
    "occupation",
    "id_card_type_code",
    "id_card_number",
    "patient_source",
    "current_address",
    "current_address_phone",
    "current_address_zip",
    "household_address",
    "household_address_zip",
    "household_address_phone",
    "work_unit",
    "work_unit_address",
    "work_unit_phone",
    "work_unit_zip",
    "contact_name",
    "contact_relationship",
    "contact_address",
    "contact_phone",
    "treatment_type",
    "admission_path",
    "discharge_method",
    "readmission_plan",
    "readmission_purpose",
    "transferring_institution",
    "transferring_institution_Community",
    "tcm_preparation_usage",
    "clinical_pathway",
    "tcm_equipment_usage",
    "tcm_technique_usage",
    "tcm_nursing",
    "tcm_outpatient_disease_name",
    "tcm_outpatient_disease_code",
    "tcm_outpatient_syndrome_name",
    "tcm_outpatient_syndrome_code",
    "tcm_outpatient_traditional_medicine_name",
    "tcm_outpatient_traditional_medicine_code",
    "tcm_discharge_main_disease_name",
    "tcm_discharge_main_disease_code",
    "tcm_discharge_main_syndrome_name",
    "tcm_discharge_main_syndrome_code",
    "tcm_discharge_condition",
    "tcm_discharge_status",
    "tcm_discharge_treatment_principle_code",
    "tcm_discharge_treatment_principle_name",
    "tcm_discharge_traditional_medicine_code",
    "tcm_discharge_traditional_medicine_name",
    "outpatient_disease_name",
    "outpatient_disease_code",
    "admission_disease_name",
    "admission_disease_code",
    "discharge_disease_name",
    "discharge_disease_code",
    "admission_condition",
    "discharge_status",
    "discharge_tumor_name",
    "discharge_tumor_code",
    "pathology_disease_name",
    "pathology_disease_code",
    "pathology_number",
    "injury_poison_code",
    "autopsy",
    "drug_allergy",
    "allergy_drug1",
    "allergy_drug2",
    "allergy_drug3",
    "diagnosis_consistency_outpatient",
    "diagnosis_consistency_admission",
    "diagnosis_consistency_operation",
    "blood_type",
    "rh",
    "blood_transfusion_reaction",
    "syphilis_screening_pregnancy",
    "postpartum_hemorrhage",
    "department_director",
    "chief_physician",
    "attending_physician",
    "resident_physician",
    "visiting_physician",
    "intern_physician",
    "responsible_nurse",
    "quality_control_physician",
    "quality_control_nurse",
    "coder",
    "case_quality",
    "quality_control_date",
    "critical_condition",
    "difficult_case",
    "emergency_case",
    "hospital_infection",
    "blood_transfusion",
    "rescue_times",
    "rescue_success",
    "blood_fee",
    "tcm_treatment_fee",
    "tcm_preparation_fee",
    "anesthesia_fee",
    "admission_times",
];

/// Display label for a field key, or the key itself when unmapped
pub fn label(key: &str) -> &str {
    FIELD_LABELS.get(key).copied().unwrap_or(key)
}
