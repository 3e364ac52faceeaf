//! Discharge record model
//!
//! A [`Record`] is the flat key/value view of one discharge form plus the
//! repeating list of operation rows. Values stay as the raw strings read
//! from the form; interpretation happens in the rules through the accessors
//! below.

use crate::constants::{BLANK_PLACEHOLDERS, CASE_NUMBER_KEY, OPERATIONS_KEY};
use crate::error::{Error, Result};
use crate::value_objects::Flag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// True when a raw value is absent or one of the blank placeholders
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| BLANK_PLACEHOLDERS.contains(&v))
}

/// One surgical or procedure row of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationEntry {
    pub operation_code: Option<String>,
    pub operation_name: Option<String>,
    pub operation_date: Option<String>,
    pub operation_level: Option<String>,
    pub surgeon: Option<String>,
    pub first_assistant: Option<String>,
    pub second_assistant: Option<String>,
    pub incision_healing: Option<String>,
    pub anesthesia_method: Option<String>,
    pub anesthesiologist: Option<String>,
    pub operation_department: Option<String>,
    pub is_dsa: Option<String>,
    pub is_operation: Option<String>,
}

impl OperationEntry {
    /// Whether an operation code has been entered
    pub fn has_code(&self) -> bool {
        !is_blank(self.operation_code.as_deref())
    }

    /// Whether a surgeon has been entered
    pub fn has_surgeon(&self) -> bool {
        !is_blank(self.surgeon.as_deref())
    }

    /// Whether an anesthesia method has been entered
    pub fn has_anesthesia_method(&self) -> bool {
        !is_blank(self.anesthesia_method.as_deref())
    }

    /// Whether an anesthesiologist has been entered
    pub fn has_anesthesiologist(&self) -> bool {
        !is_blank(self.anesthesiologist.as_deref())
    }

    /// Fields that were supplied, as `(key, value)` in acquisition order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.operation_code,
            &self.operation_name,
            &self.operation_date,
            &self.operation_level,
            &self.surgeon,
            &self.first_assistant,
            &self.second_assistant,
            &self.incision_healing,
            &self.anesthesia_method,
            &self.anesthesiologist,
            &self.operation_department,
            &self.is_dsa,
            &self.is_operation,
        ];
        crate::catalog::OPERATION_KEYS
            .iter()
            .zip(values)
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect()
    }
}

/// One discharge form: flat field values plus the operations list
///
/// # Example
///
/// ```
/// use mrqc_domain::Record;
///
/// let record = Record::from_json(r#"{"name": "张三", "nationality": null, "operations": []}"#)
///     .expect("valid record");
///
/// assert_eq!(record.get("name"), Some("张三"));
/// assert_eq!(record.get("nationality"), None);
/// assert!(record.operations.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Flat field values; `None` means the field could not be read
    #[serde(flatten)]
    pub fields: BTreeMap<String, Option<String>>,
    /// Operation rows in form order
    pub operations: Vec<OperationEntry>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Some(value.into()));
        self
    }

    /// Append an operation row
    pub fn with_operation(mut self, operation: OperationEntry) -> Self {
        self.operations.push(operation);
        self
    }

    /// Parse a record from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a record from a JSON value
    ///
    /// The value must be an object and `operations`, when present, a list of
    /// objects. Scalars become text both at the top level and inside
    /// operation entries (`null` is kept as an unreadable field). Other
    /// nested values are outside the contract and are ignored.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::invalid_record("record must be a JSON object"));
        };

        let mut record = Self::new();
        for (key, value) in map {
            if key == OPERATIONS_KEY {
                record.operations = parse_operations(value)?;
                continue;
            }
            if let Some(field) = scalar_text(value) {
                record.fields.insert(key, field);
            }
        }
        Ok(record)
    }

    /// Raw value of a field, if it was read
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Value of a field when it is non-empty
    pub fn present(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Whether a field is missing, empty or a blank placeholder
    pub fn is_blank(&self, key: &str) -> bool {
        is_blank(self.get(key))
    }

    /// Whether a field holds one of the given raw values
    pub fn is_one_of(&self, key: &str, values: &[&str]) -> bool {
        self.get(key).is_some_and(|v| values.contains(&v))
    }

    /// Field interpreted as a yes/no flag
    pub fn flag(&self, key: &str) -> Flag {
        Flag::parse(self.get(key))
    }

    /// Case number read back from the form, or empty
    pub fn case_id(&self) -> &str {
        self.get(CASE_NUMBER_KEY).unwrap_or_default()
    }
}

fn parse_operations(value: Value) -> Result<Vec<OperationEntry>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let Value::Object(entry) = item else {
                    return Err(Error::invalid_record(format!(
                        "operation entry {} must be an object",
                        index + 1
                    )));
                };
                let entry: Map<String, Value> = entry
                    .into_iter()
                    .filter_map(|(key, value)| {
                        scalar_text(value).map(|text| (key, text.map_or(Value::Null, Value::String)))
                    })
                    .collect();
                serde_json::from_value(Value::Object(entry)).map_err(|e| {
                    Error::invalid_record(format!("operation entry {}: {}", index + 1, e))
                })
            })
            .collect(),
        _ => Err(Error::invalid_record("operations must be a list")),
    }
}

/// Text of a scalar value; `None` for lists and objects
///
/// `null` yields `Some(None)`, an unreadable field.
fn scalar_text(value: Value) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s)),
        Value::Number(n) => Some(Some(n.to_string())),
        Value::Bool(b) => Some(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}
