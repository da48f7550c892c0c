// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility checks and the aggregator that runs them.
//!
//! Each check covers one report category. Checks are independent and
//! read-only over the [`Document`]; the aggregator picks the set for the
//! requested conformance level and isolates their failures from each other.

pub mod abbreviations;
pub mod contrast;
pub mod headings;
pub mod images;
pub mod inputs;
pub mod language;
pub mod links;
pub mod sections;
pub mod unusual_words;

use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::{CheckError, Result};
use crate::finding::{Category, ConformanceLevel, Finding, IssuesReport};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Trait implemented by all checks
pub trait Check: Send + Sync {
    /// Human-readable name of this check
    fn name(&self) -> &str;

    /// Report category this check fills
    fn category(&self) -> Category;

    /// Check if this check runs at the given conformance level
    fn applies_to_level(&self, level: ConformanceLevel) -> bool;

    /// Inspect the document and return findings in document order
    fn run(
        &self,
        document: &Document,
        config: &ScanConfig,
    ) -> std::result::Result<Vec<Finding>, CheckError>;
}

/// Every check, in report order
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(images::ImageAltCheck),
        Box::new(inputs::InputLabelCheck),
        Box::new(contrast::ContrastCheck),
        Box::new(headings::HeadingHierarchyCheck),
        Box::new(language::LanguageAttributeCheck),
        Box::new(links::LinkContextCheck),
        Box::new(sections::SectionHeadingCheck),
        Box::new(abbreviations::AbbreviationCheck),
        Box::new(unusual_words::UnusualWordsCheck),
    ]
}

/// Parse `html` and run every check applicable at `level` with default
/// settings
pub fn run_checks(html: &str, level: ConformanceLevel) -> Result<IssuesReport> {
    run_checks_with_config(html, &ScanConfig::with_level(level))
}

/// Parse `html` and run every check applicable at `config.level`.
///
/// Fails only when `config.strict_parsing` is set and the markup had
/// parse errors.
pub fn run_checks_with_config(html: &str, config: &ScanConfig) -> Result<IssuesReport> {
    let document = if config.strict_parsing {
        Document::parse_strict(html)?
    } else {
        Document::parse(html)
    };
    Ok(run_document(&document, config))
}

/// Run every check applicable at `config.level` on a parsed document
pub fn run_document(document: &Document, config: &ScanConfig) -> IssuesReport {
    run_with(&all_checks(), document, config)
}

/// Run the given checks. A check that errors or panics leaves a single
/// diagnostic finding in its category; the others still run.
pub fn run_with(
    checks: &[Box<dyn Check>],
    document: &Document,
    config: &ScanConfig,
) -> IssuesReport {
    let mut report = IssuesReport::new();

    for check in checks {
        if !check.applies_to_level(config.level) {
            continue;
        }

        let category = check.category();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(document, config)));

        let findings = match outcome {
            Ok(Ok(findings)) => {
                debug!("{}: {} finding(s)", check.name(), findings.len());
                findings
            }
            Ok(Err(err)) => {
                warn!("{} failed: {}", check.name(), err);
                vec![Finding::check_failed(category, check.name(), &err.to_string())]
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                warn!("{} panicked: {}", check.name(), reason);
                vec![Finding::check_failed(category, check.name(), &reason)]
            }
        };

        report.insert(category, findings);
    }

    report
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCheck;

    impl Check for FailingCheck {
        fn name(&self) -> &str {
            "Failing"
        }

        fn category(&self) -> Category {
            Category::Contrast
        }

        fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
            true
        }

        fn run(
            &self,
            _document: &Document,
            _config: &ScanConfig,
        ) -> std::result::Result<Vec<Finding>, CheckError> {
            Err(CheckError::Internal("unexpected attribute shape".into()))
        }
    }

    struct PanickingCheck;

    impl Check for PanickingCheck {
        fn name(&self) -> &str {
            "Panicking"
        }

        fn category(&self) -> Category {
            Category::Headings
        }

        fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
            true
        }

        fn run(
            &self,
            _document: &Document,
            _config: &ScanConfig,
        ) -> std::result::Result<Vec<Finding>, CheckError> {
            panic!("index out of range")
        }
    }

    #[test]
    fn test_aa_has_baseline_keys_only() {
        let report = run_checks("<p>hello</p>", ConformanceLevel::AA).unwrap();
        let keys: Vec<Category> = report.categories().collect();
        assert_eq!(keys, Category::BASELINE.to_vec());
    }

    #[test]
    fn test_aaa_has_all_nine_keys() {
        let report = run_checks(
            r#"<html lang="en"><body><p>hello</p></body></html>"#,
            ConformanceLevel::AAA,
        )
        .unwrap();
        assert_eq!(report.category_count(), 9);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_failing_check_is_isolated() {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(images::ImageAltCheck),
            Box::new(FailingCheck),
            Box::new(PanickingCheck),
        ];
        let document = Document::parse(r#"<img src="a.png">"#);
        let report = run_with(&checks, &document, &ScanConfig::default());

        assert_eq!(report.get(Category::Images).unwrap().len(), 1);

        let contrast = report.get(Category::Contrast).unwrap();
        assert_eq!(contrast.len(), 1);
        assert!(contrast[0].internal_error);
        assert!(contrast[0].message.contains("unexpected attribute shape"));

        let headings = report.get(Category::Headings).unwrap();
        assert_eq!(headings.len(), 1);
        assert!(headings[0].message.contains("index out of range"));
        assert!(report.has_internal_errors());
    }

    #[test]
    fn test_run_checks_is_idempotent() {
        let html = r#"<img src="a.png"><h1>A</h1><h3>B</h3><a href="/x">here</a>"#;
        let first = run_checks(html, ConformanceLevel::AAA).unwrap();
        let second = run_checks(html, ConformanceLevel::AAA).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_strict_parsing_propagates() {
        let config = ScanConfig {
            strict_parsing: true,
            ..ScanConfig::default()
        };
        assert!(run_checks_with_config("<p>no doctype", &config).is_err());
        assert!(run_checks_with_config("<p>no doctype", &ScanConfig::default()).is_ok());
    }
}
