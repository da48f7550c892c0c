// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for scan results.
//!
//! Supports multiple output formats:
//! - Text: human-readable findings grouped by page and category
//! - JSON: structured results for programmatic consumption
//! - HTML: standalone page with one card per scanned document

mod html;

use crate::error::Result;
use crate::scanner::{PageReport, ScanSummary};
use serde::Serialize;

pub use html::HtmlReport;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// Standalone HTML page
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for a scan
pub fn generate_report(summary: &ScanSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(summary)),
        OutputFormat::Json => generate_json_report(summary),
        OutputFormat::Html => {
            let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            Ok(HtmlReport::new(summary, &generated_at).render())
        }
    }
}

/// Generate human-readable text report
fn generate_text_report(summary: &ScanSummary) -> String {
    let mut output = String::new();

    output.push_str("=== FinAccAI Accessibility Report ===\n\n");
    output.push_str(&format!(
        "Pages scanned: {}, with issues: {}, with errors: {}, total issues: {}\n\n",
        summary.pages_scanned(),
        summary.pages_with_issues(),
        summary.pages_with_errors(),
        summary.total_issues()
    ));

    for page in &summary.pages {
        output.push_str(&format!(
            "--- {} ({}) ---\n",
            page.title.as_deref().unwrap_or("(no title)"),
            page.source
        ));

        if let Some(ref error) = page.error {
            output.push_str(&format!("Error: {}\n\n", error));
            continue;
        }

        output.push_str(&format!(
            "WCAG level: {}, status: {}\n",
            page.level,
            if page.has_issues() { "issues found" } else { "clean" }
        ));

        for (category, findings) in page.issues.iter() {
            output.push_str(&format!("{} ({})\n", category.title(), findings.len()));
            for finding in findings {
                output.push_str(&format!("  - {}\n", finding.message));
            }
        }

        output.push('\n');
    }

    if summary.pages_with_errors() > 0 && summary.pages_with_issues() == 0 {
        output.push_str("RESULT: INCOMPLETE (some pages could not be checked)\n");
    } else if summary.pages_with_issues() > 0 {
        output.push_str("RESULT: ISSUES FOUND\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_by: &'static str,
    version: &'static str,
    summary: JsonSummary,
    pages: Vec<JsonPage<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    pages_scanned: usize,
    pages_with_issues: usize,
    pages_with_errors: usize,
    total_issues: usize,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    #[serde(flatten)]
    page: &'a PageReport,
    total_issues: usize,
}

/// Generate JSON report
fn generate_json_report(summary: &ScanSummary) -> Result<String> {
    let report = JsonReport {
        generated_by: "finaccai",
        version: env!("CARGO_PKG_VERSION"),
        summary: JsonSummary {
            pages_scanned: summary.pages_scanned(),
            pages_with_issues: summary.pages_with_issues(),
            pages_with_errors: summary.pages_with_errors(),
            total_issues: summary.total_issues(),
        },
        pages: summary
            .pages
            .iter()
            .map(|page| JsonPage {
                page,
                total_issues: page.total_issues(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
