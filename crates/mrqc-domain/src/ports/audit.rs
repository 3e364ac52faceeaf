//! Audit trail port

use crate::entities::AuditRow;
use crate::error::Result;

/// Bounded, append-only history of validation runs
///
/// Implementations keep at most a fixed number of rows and drop the oldest
/// first. `append` performs a full read-modify-write and must serialize
/// concurrent writers itself.
///
/// # Example
///
/// ```no_run
/// use mrqc_domain::{AuditRow, AuditTrail};
///
/// fn persist(trail: &dyn AuditTrail, row: &AuditRow) -> mrqc_domain::Result<()> {
///     let retained = trail.append(row)?;
///     println!("{retained} rows retained");
///     Ok(())
/// }
/// ```
pub trait AuditTrail: Send + Sync {
    /// Append one row, trim to the retention window, return the rows retained
    fn append(&self, row: &AuditRow) -> Result<usize>;

    /// Data rows currently persisted, oldest first
    fn read_rows(&self) -> Result<Vec<Vec<String>>>;
}
