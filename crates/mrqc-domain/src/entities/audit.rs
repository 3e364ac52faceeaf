//! Audit trail rows
//!
//! One [`AuditRow`] is written per validation run. It flattens the record
//! into `(value, status)` column pairs following [`MAIN_FIELDS`] and packs
//! the operations list into a single cell.

use crate::catalog::{label, MAIN_FIELDS};
use crate::constants::{
    AUDIT_CASE_ID_HEADER, AUDIT_OPERATIONS_HEADER, AUDIT_OPERATIONS_STATUS_HEADER,
    AUDIT_STATUS_SUFFIX, AUDIT_TIMESTAMP_HEADER,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Quality-control status of one audited field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldStatus {
    /// No rule looks at this field
    NotChecked,
    /// Checked and no finding names it
    Passed,
    /// At least one finding names it
    Failed,
}

impl FieldStatus {
    /// Cell value written to the audit table
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotChecked => "未质控",
            Self::Passed => "通过",
            Self::Failed => "未通过",
        }
    }

    /// Parse a status cell read back from the audit table
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell {
            "未质控" => Some(Self::NotChecked),
            "通过" => Some(Self::Passed),
            "未通过" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened snapshot of one run, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    /// Case identifier
    pub case_id: String,
    /// Run timestamp, already formatted
    pub run_at: String,
    /// `(value, status)` per entry of [`MAIN_FIELDS`], same order
    pub fields: Vec<(String, FieldStatus)>,
    /// Serialized operations list
    pub operations: String,
    /// Status of the operations list as a whole
    pub operations_status: FieldStatus,
}

impl AuditRow {
    /// Column headers of the audit table
    pub fn header() -> Vec<String> {
        let mut header = Vec::with_capacity(MAIN_FIELDS.len() * 2 + 4);
        header.push(AUDIT_CASE_ID_HEADER.to_string());
        header.push(AUDIT_TIMESTAMP_HEADER.to_string());
        for key in MAIN_FIELDS {
            let name = label(key);
            header.push(name.to_string());
            header.push(format!("{name}{AUDIT_STATUS_SUFFIX}"));
        }
        header.push(AUDIT_OPERATIONS_HEADER.to_string());
        header.push(AUDIT_OPERATIONS_STATUS_HEADER.to_string());
        header
    }

    /// Cells of this row in header order
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.fields.len() * 2 + 4);
        cells.push(self.case_id.clone());
        cells.push(self.run_at.clone());
        for (value, status) in &self.fields {
            cells.push(value.clone());
            cells.push(status.as_str().to_string());
        }
        cells.push(self.operations.clone());
        cells.push(self.operations_status.as_str().to_string());
        cells
    }

    /// Decode a row read back from the table
    ///
    /// Rows written under an older column layout may be short; missing
    /// cells decode as empty values and unknown or missing status cells as
    /// [`FieldStatus::NotChecked`].
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
        let status = |index: usize| {
            cells
                .get(index)
                .and_then(|c| FieldStatus::from_cell(c))
                .unwrap_or(FieldStatus::NotChecked)
        };

        let fields = (0..MAIN_FIELDS.len())
            .map(|i| (cell(2 + i * 2), status(3 + i * 2)))
            .collect();
        let operations_index = 2 + MAIN_FIELDS.len() * 2;

        Self {
            case_id: cell(0),
            run_at: cell(1),
            fields,
            operations: cell(operations_index),
            operations_status: status(operations_index + 1),
        }
    }

    /// Status recorded for a field key, if the key is audited
    pub fn status_of(&self, key: &str) -> Option<FieldStatus> {
        let index = MAIN_FIELDS.iter().position(|k| *k == key)?;
        self.fields.get(index).map(|(_, status)| *status)
    }

    /// Labels of the fields that failed, in column order
    ///
    /// The operations list is named by its column header.
    pub fn failed_labels(&self) -> Vec<&'static str> {
        let mut failed: Vec<&'static str> = MAIN_FIELDS
            .iter()
            .copied()
            .filter(|key| self.status_of(key) == Some(FieldStatus::Failed))
            .map(label)
            .collect();
        if self.operations_status == FieldStatus::Failed {
            failed.push(AUDIT_OPERATIONS_HEADER);
        }
        failed
    }
}
