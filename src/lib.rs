// SPDX-License-Identifier: PMPL-1.0-or-later
//! FinAccAI - rule-based WCAG accessibility checker for HTML
//!
//! Parses an HTML document and runs a set of independent, read-only
//! checks over it, producing an [`IssuesReport`] that maps each category
//! to its findings in document order.
//!
//! ## Checks
//!
//! Every level:
//! - **images** (1.1.1): `<img>` without usable alt text
//! - **inputs** (3.3.2): `<input>` without a label or ARIA name
//! - **contrast** (1.4.3/1.4.6): low contrast in inline hex colors
//! - **headings** (1.3.1): skipped heading levels
//!
//! Level AAA only:
//! - **language_attributes** (3.1.1): `<html>` without `lang`
//! - **link_context** (2.4.9): vague or very short link text
//! - **section_headings** (2.4.10): content and sections without headings
//! - **abbreviations** (3.1.4): unexpanded abbreviations
//! - **unusual_words** (3.1.3): jargon on long pages without a glossary
//!
//! ```no_run
//! use finaccai::{run_checks, Category, ConformanceLevel};
//!
//! let report = run_checks(r#"<img src="chart.png">"#, ConformanceLevel::AA)?;
//! assert_eq!(report.get(Category::Images).map(|f| f.len()), Some(1));
//! # Ok::<(), finaccai::ScanError>(())
//! ```

pub mod checks;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod finding;
pub mod report;
pub mod scanner;

pub use checks::{run_checks, run_checks_with_config, run_document};
pub use config::ScanConfig;
pub use document::Document;
pub use error::{CheckError, ScanError};
pub use finding::{Category, ConformanceLevel, Finding, IssuesReport};
