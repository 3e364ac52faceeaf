//! Bounded CSV audit table
//!
//! Every append rewrites the whole table: read the existing rows, add the
//! new one, drop the oldest beyond `max_records`, write everything to a
//! temporary file in the same directory and rename it over the table.
//! Writers are serialized in-process by a mutex and across processes by an
//! exclusive lock on a sidecar `.lock` file.

use crate::constants::{AUDIT_LOCK_EXTENSION, UTF8_BOM};
use crate::error_ext::ErrorContext;
use fs2::FileExt;
use mrqc_domain::error::{Error, Result};
use mrqc_domain::{AuditRow, AuditTrail};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// CSV-backed audit trail
#[derive(Debug)]
pub struct CsvAuditTrail {
    path: PathBuf,
    max_records: usize,
    writer: Mutex<()>,
}

impl CsvAuditTrail {
    /// Audit table at `path` keeping at most `max_records` rows (at least one)
    pub fn new<P: AsRef<Path>>(path: P, max_records: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_records: max_records.max(1),
            writer: Mutex::new(()),
        }
    }

    /// Location of the table
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Sidecar file locked while the table is rewritten: `<table>.lock`
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".");
        name.push(AUDIT_LOCK_EXTENSION);
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.writer
            .lock()
            .map_err(|_| Error::internal("Audit trail writer lock poisoned"))
    }

    /// Open and exclusively lock the sidecar file, blocking until available
    fn lock_file(&self) -> Result<File> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .io_context(format!("Failed to open lock file {}", lock_path.display()))?;
        FileExt::lock_exclusive(&file)
            .io_context(format!("Failed to lock {}", lock_path.display()))?;
        Ok(file)
    }

    /// Data rows of the table; the header row and a leading BOM are skipped
    fn read_existing(&self) -> Result<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)
            .io_context(format!("Failed to read audit table {}", self.path.display()))?;
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes.as_slice());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<String>>())
                    .csv_context("Failed to parse audit table")
            })
            .collect()
    }

    /// Replace the table with header plus `rows`, atomically
    fn write_all(&self, rows: &[Vec<String>]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)
            .io_context(format!("Failed to create directory {}", dir.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .io_context("Failed to create temporary audit table")?;
        tmp.write_all(UTF8_BOM)
            .io_context("Failed to write audit table")?;

        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(tmp.as_file_mut());
            writer
                .write_record(AuditRow::header())
                .csv_context("Failed to write audit header")?;
            for row in rows {
                writer
                    .write_record(row)
                    .csv_context("Failed to write audit row")?;
            }
            writer.flush().io_context("Failed to flush audit table")?;
        }

        tmp.persist(&self.path).map_err(|e| {
            Error::io_with_source(
                format!("Failed to replace audit table {}", self.path.display()),
                e.error,
            )
        })?;
        Ok(())
    }
}

impl AuditTrail for CsvAuditTrail {
    fn append(&self, row: &AuditRow) -> Result<usize> {
        let _guard = self.guard()?;

        let dir = self.parent_dir();
        fs::create_dir_all(dir)
            .io_context(format!("Failed to create directory {}", dir.display()))?;
        let lock = self.lock_file()?;

        let mut rows = self.read_existing()?;
        rows.push(row.to_cells());
        if rows.len() > self.max_records {
            let excess = rows.len() - self.max_records;
            rows.drain(..excess);
            debug!(dropped = excess, "Trimmed audit table");
        }
        self.write_all(&rows)?;

        FileExt::unlock(&lock).io_context("Failed to release audit table lock")?;
        Ok(rows.len())
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let _guard = self.guard()?;
        self.read_existing()
    }
}
