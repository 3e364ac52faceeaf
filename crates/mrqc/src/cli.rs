//! Command line interface
//!
//! `mrqc check` validates record files, `mrqc history` lists recent audit
//! rows. Parsing and rendering live here so the binary stays a thin shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mrqc_domain::{AuditRow, Record};
use mrqc_infrastructure::{QcOutcome, QcService};
use mrqc_validate::{CounterSnapshot, Reporter, RunCounters};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command line interface for mrqc
#[derive(Parser, Debug)]
#[command(name = "mrqc")]
#[command(about = "Discharge record quality control")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check discharge records, one JSON object per file
    Check {
        /// Record files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Do not write audit rows
        #[arg(long)]
        no_audit: bool,
    },
    /// Show the most recent audit rows, newest first
    History {
        /// Number of rows to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Outcomes of one `check` invocation
#[derive(Debug, Clone)]
pub struct CheckSummary {
    pub outcomes: Vec<QcOutcome>,
    pub counters: CounterSnapshot,
}

impl CheckSummary {
    /// Whether any record has an Error, LogicError or Warning finding
    pub fn has_issues(&self) -> bool {
        self.outcomes.iter().any(|o| !o.report.passed)
    }
}

/// Check every file in order, each on a blocking worker
///
/// Counters start from zero for the invocation. Every file is read and parsed
/// before any record is checked, so a file that cannot be read or is not a
/// valid record aborts the run without touching the audit table.
pub async fn check_files(service: Arc<QcService>, files: Vec<PathBuf>) -> Result<CheckSummary> {
    info!(files = files.len(), "Starting check run");
    let records = tokio::task::spawn_blocking(move || load_records(&files))
        .await
        .context("Record loader failed")??;

    let mut counters = RunCounters::new();
    let mut outcomes = Vec::with_capacity(records.len());
    for record in records {
        let service = Arc::clone(&service);
        let (outcome, updated) = tokio::task::spawn_blocking(move || {
            let outcome = service.run(&record, &mut counters);
            (outcome, counters)
        })
        .await
        .context("Check worker failed")?;

        counters = updated;
        outcomes.push(outcome);
    }

    let snapshot = counters.get();
    info!(
        total = snapshot.total,
        issues = snapshot.issues,
        "Check run finished"
    );
    Ok(CheckSummary {
        outcomes,
        counters: snapshot,
    })
}

/// Read and parse every file, stopping at the first failure
fn load_records(files: &[PathBuf]) -> Result<Vec<Record>> {
    files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Record::from_json(&content)
                .with_context(|| format!("Invalid record in {}", path.display()))
        })
        .collect()
}

/// Totals line printed after the reports
pub fn counters_line(counters: &CounterSnapshot) -> String {
    format!(
        "累计检查 {} 项，发现问题 {} 项，通过 {} 项",
        counters.total, counters.issues, counters.passed
    )
}

/// Render a check summary in the requested format
pub fn render(summary: &CheckSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut output = String::new();
            for outcome in &summary.outcomes {
                output.push_str(&Reporter::to_human_readable(&outcome.report));
            }
            output.push_str(&counters_line(&summary.counters));
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Json => {
            let reports: Vec<_> = summary.outcomes.iter().map(|o| &o.report).collect();
            let value = json!({
                "reports": reports,
                "counters": summary.counters,
            });
            let mut output =
                serde_json::to_string_pretty(&value).context("Failed to encode reports")?;
            output.push('\n');
            Ok(output)
        }
    }
}

/// One line per audit row, newest first: case id, run time, failed fields
pub fn history_lines(rows: &[Vec<String>], limit: usize) -> Vec<String> {
    rows.iter()
        .rev()
        .take(limit)
        .map(|cells| {
            let row = AuditRow::from_cells(cells);
            let failed = row.failed_labels();
            if failed.is_empty() {
                format!("{}\t{}\t全部通过", row.case_id, row.run_at)
            } else {
                format!("{}\t{}\t未通过: {}", row.case_id, row.run_at, failed.join(", "))
            }
        })
        .collect()
}
