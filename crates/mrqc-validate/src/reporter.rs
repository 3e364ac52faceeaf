//! Report aggregation and rendering
//!
//! Turns the engine output into a report: findings sorted by severity, an
//! issue count that leaves notices out, and renderings for the terminal,
//! JSON consumers and the log.

use crate::engine::Validation;
use mrqc_domain::{Finding, Severity};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

const RULE_LINE: &str = "--------------------";

/// Aggregated outcome of one record's validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QcReport {
    /// Case identifier, empty when the form did not show one
    pub case_id: String,
    /// Findings, highest severity first; rule order kept within a severity
    pub findings: Vec<Finding>,
    /// Applicable rule evaluations
    pub check_count: usize,
    /// Findings of severity Error, LogicError or Warning
    pub issue_count: usize,
    /// Advisory findings
    pub notice_count: usize,
    /// Whether no issue was found
    pub passed: bool,
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Sort findings and derive the counts
    pub fn aggregate(findings: &[Finding], check_count: usize, case_id: &str) -> QcReport {
        let mut sorted = findings.to_vec();
        sorted.sort_by_key(|finding| finding.severity);

        let issue_count = sorted.iter().filter(|f| f.is_issue()).count();
        QcReport {
            case_id: case_id.to_string(),
            notice_count: sorted.len() - issue_count,
            findings: sorted,
            check_count,
            issue_count,
            passed: issue_count == 0,
        }
    }

    /// Aggregate an engine result
    pub fn from_validation(validation: &Validation) -> QcReport {
        Self::aggregate(
            &validation.findings,
            validation.check_count,
            &validation.case_id,
        )
    }

    /// Header line of a report
    pub fn header(report: &QcReport) -> String {
        if report.case_id.is_empty() {
            "--- 首页质控报告 ---".to_string()
        } else {
            format!("--- 首页质控报告 [病案号: {}] ---", report.case_id)
        }
    }

    /// Closing summary line of a report
    pub fn summary(report: &QcReport) -> String {
        if report.findings.is_empty() {
            "未发现明显的缺漏或逻辑错误。".to_string()
        } else if report.issue_count > 0 {
            format!(
                "报告总结：共发现 {} 个问题（错误/警告）。",
                report.issue_count
            )
        } else {
            "报告总结：未发现严重问题（错误/警告），但存在一些“注意”事项。".to_string()
        }
    }

    /// Report as display lines
    pub fn to_lines(report: &QcReport) -> Vec<String> {
        let mut lines = vec![Self::header(report), RULE_LINE.to_string()];
        if report.findings.is_empty() {
            lines.push(Self::summary(report));
            lines.push(RULE_LINE.to_string());
            return lines;
        }

        lines.extend(report.findings.iter().map(ToString::to_string));
        lines.push(RULE_LINE.to_string());
        lines.push(Self::summary(report));
        lines
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &QcReport) -> String {
        let mut output = Self::to_lines(report).join("\n");
        output.push('\n');
        output
    }

    /// Generate JSON report
    pub fn to_json(report: &QcReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Emit the report through the log, each finding at its own level
    pub fn log_report(report: &QcReport) {
        info!(case_id = %report.case_id, "{}", Self::header(report));
        for finding in &report.findings {
            match finding.severity {
                Severity::Error | Severity::LogicError => {
                    error!(rule = %finding.rule_id, "{finding}");
                }
                Severity::Warning => warn!(rule = %finding.rule_id, "{finding}"),
                Severity::Notice => info!(rule = %finding.rule_id, "{finding}"),
            }
        }
        if report.passed {
            info!(checks = report.check_count, "{}", Self::summary(report));
        } else {
            error!(
                checks = report.check_count,
                issues = report.issue_count,
                "{}",
                Self::summary(report)
            );
        }
    }
}
