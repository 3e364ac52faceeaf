//! mrqc - Entry Point
//!
//! Loads configuration, installs logging and dispatches the subcommand.
//! Exit status is 0 when every record passed, 1 when any record has an
//! issue, 2 when the run itself failed.

use clap::Parser;
use mrqc::cli::{Cli, Commands, check_files, history_lines, render};
use mrqc::infrastructure::logging::init_logging;
use mrqc::{AuditStore, ConfigLoader, QcService};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(config.logging.clone())?;

    match cli.command {
        Commands::Check {
            files,
            format,
            no_audit,
        } => {
            let mut service = QcService::from_config(&config);
            if no_audit {
                service = service.without_audit();
            }
            let summary = check_files(Arc::new(service), files).await?;
            print!("{}", render(&summary, format)?);
            Ok(if summary.has_issues() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::History { limit } => {
            let store = AuditStore::from_config(&config.audit);
            let rows = tokio::task::spawn_blocking(move || store.read_rows()).await??;
            for line in history_lines(&rows, limit) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
