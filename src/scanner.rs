// SPDX-License-Identifier: PMPL-1.0-or-later
//! File and directory scanner.
//!
//! Reads HTML files from disk and runs the check engine over each one.
//! Directory scans keep going past unreadable or unparseable files and
//! record the failure on that file's [`PageReport`].

use crate::checks;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::Result;
use crate::finding::{ConformanceLevel, IssuesReport};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Outcome of scanning one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    /// Path or label the HTML came from
    pub source: String,
    /// Document `<title>`, if any
    pub title: Option<String>,
    /// Level the document was checked at
    pub level: ConformanceLevel,
    /// Why the document could not be checked
    pub error: Option<String>,
    /// Findings by category (empty when `error` is set)
    pub issues: IssuesReport,
}

impl PageReport {
    /// Report for a document that could not be read or parsed
    pub fn failed(
        source: impl Into<String>,
        level: ConformanceLevel,
        error: impl ToString,
    ) -> Self {
        Self {
            source: source.into(),
            title: None,
            level,
            error: Some(error.to_string()),
            issues: IssuesReport::new(),
        }
    }

    /// Whether any check reported a finding
    pub fn has_issues(&self) -> bool {
        self.error.is_none() && !self.issues.is_clean()
    }

    pub fn total_issues(&self) -> usize {
        self.issues.total_findings()
    }
}

/// All page reports from one scan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanSummary {
    pub pages: Vec<PageReport>,
}

impl ScanSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, page: PageReport) {
        self.pages.push(page);
    }

    pub fn pages_scanned(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_with_issues(&self) -> usize {
        self.pages.iter().filter(|p| p.has_issues()).count()
    }

    pub fn pages_with_errors(&self) -> usize {
        self.pages.iter().filter(|p| p.error.is_some()).count()
    }

    pub fn total_issues(&self) -> usize {
        self.pages.iter().map(PageReport::total_issues).sum()
    }

    /// True if any page has findings or failed to scan
    pub fn has_failures(&self) -> bool {
        self.pages.iter().any(|p| p.has_issues() || p.error.is_some())
    }
}

impl From<PageReport> for ScanSummary {
    fn from(page: PageReport) -> Self {
        Self { pages: vec![page] }
    }
}

/// Check an HTML string. `source` labels the result.
pub fn scan_html(source: &str, html: &str, config: &ScanConfig) -> Result<PageReport> {
    let document = if config.strict_parsing {
        Document::parse_strict(html)?
    } else {
        Document::parse(html)
    };

    let issues = checks::run_document(&document, config);

    Ok(PageReport {
        source: source.to_string(),
        title: document.title(),
        level: config.level,
        error: None,
        issues,
    })
}

/// Check a single HTML file
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<PageReport> {
    let content = std::fs::read_to_string(path)?;
    scan_html(&path.display().to_string(), &content, config)
}

/// Check every matching file under `dir`
pub fn scan_directory(dir: &Path, config: &ScanConfig) -> Result<ScanSummary> {
    let mut summary = ScanSummary::new();

    info!("Scanning directory: {}", dir.display());

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories, but never the root
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !config.is_excluded_dir(name) && !name.starts_with('.')
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.is_scannable_extension(ext) {
            continue;
        }

        let page = match scan_file(path, config) {
            Ok(page) => page,
            Err(e) => {
                warn!("Could not check {}: {}", path.display(), e);
                PageReport::failed(path.display().to_string(), config.level, e)
            }
        };
        summary.add(page);
    }

    info!(
        "Scanned {} files, found {} issues",
        summary.pages_scanned(),
        summary.total_issues()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Category;

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_directory(Path::new("/nonexistent/path"), &ScanConfig::default());
        // walkdir reports the missing root as an entry error
        assert_eq!(result.unwrap().pages_scanned(), 0);
    }

    #[test]
    fn test_scan_html_extracts_title() {
        let page = scan_html(
            "inline",
            r#"<html lang="en"><head><title>Rates</title></head><body><img src="a.png"></body></html>"#,
            &ScanConfig::default(),
        )
        .unwrap();
        assert_eq!(page.title.as_deref(), Some("Rates"));
        assert_eq!(page.issues.get(Category::Images).unwrap().len(), 1);
        assert!(page.has_issues());
    }

    #[test]
    fn test_scan_missing_file_is_io_error() {
        let result = scan_file(Path::new("/nonexistent/index.html"), &ScanConfig::default());
        assert!(matches!(result, Err(crate::error::ScanError::Io(_))));
    }

    #[test]
    fn test_summary_counts() {
        let config = ScanConfig::default();
        let mut summary = ScanSummary::new();
        summary.add(scan_html("clean", r#"<html lang="en"><p>ok</p></html>"#, &config).unwrap());
        summary.add(scan_html("dirty", r#"<img src="x.png">"#, &config).unwrap());
        summary.add(PageReport::failed(
            "broken",
            ConformanceLevel::AAA,
            "stream did not contain valid UTF-8",
        ));

        assert_eq!(summary.pages_scanned(), 3);
        assert_eq!(summary.pages_with_issues(), 1);
        assert_eq!(summary.pages_with_errors(), 1);
        assert!(summary.has_failures());
    }
}
