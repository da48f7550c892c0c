// SPDX-License-Identifier: PMPL-1.0-or-later
//! Section heading check - WCAG 2.4.10 Section Headings (Level AAA)
//!
//! Reports text-heavy pages with almost no headings, and sectioning
//! elements that carry no heading of their own.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::{Document, HEADING_TAGS};
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Sectioning elements expected to be introduced by a heading
const SECTIONING_TAGS: &[&str] = &["section", "article", "nav", "aside"];

/// More paragraphs than this count as substantial content
const PARAGRAPH_THRESHOLD: usize = 10;

/// Substantial content needs at least this many headings
const MIN_HEADINGS: usize = 3;

/// Check for content that is not organized under headings
pub struct SectionHeadingCheck;

impl Check for SectionHeadingCheck {
    fn name(&self) -> &str {
        "Section Headings"
    }

    fn category(&self) -> Category {
        Category::SectionHeadings
    }

    fn applies_to_level(&self, level: ConformanceLevel) -> bool {
        level == ConformanceLevel::AAA
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let mut findings = Vec::new();

        let headings = document.count(HEADING_TAGS)?;
        let paragraphs = document.count(&["p"])?;

        if paragraphs > PARAGRAPH_THRESHOLD && headings < MIN_HEADINGS {
            findings.push(Finding::new(
                Category::SectionHeadings,
                format!(
                    "AAA: Page has {} paragraphs but only {} headings. Use more headings to organize content into sections.",
                    paragraphs, headings
                ),
            ));
        }

        for section in document.elements_by_tag(SECTIONING_TAGS)? {
            if section.has_descendant(HEADING_TAGS) {
                continue;
            }

            let id = section.attribute("id").unwrap_or("unknown");
            let snippet = section.snippet(config.snippet_limit);
            findings.push(
                Finding::new(
                    Category::SectionHeadings,
                    format!(
                        "AAA: <{}> element (id='{}') should have a heading to identify its purpose",
                        section.tag_name(),
                        id
                    ),
                )
                .with_snippet(snippet),
            );
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Finding> {
        SectionHeadingCheck
            .run(&Document::parse(html), &ScanConfig::default())
            .expect("check runs")
    }

    fn paragraphs(n: usize) -> String {
        "<p>Statement line.</p>".repeat(n)
    }

    #[test]
    fn test_many_paragraphs_few_headings() {
        let html = format!("<h1>Statement</h1>{}", paragraphs(11));
        let findings = check(&html);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "AAA: Page has 11 paragraphs but only 1 headings. Use more headings to organize content into sections."
        );
    }

    #[test]
    fn test_paragraph_threshold_is_exclusive() {
        assert!(check(&paragraphs(10)).is_empty());
    }

    #[test]
    fn test_enough_headings() {
        let html = format!("<h1>A</h1><h2>B</h2><h2>C</h2>{}", paragraphs(20));
        assert!(check(&html).is_empty());
    }

    #[test]
    fn test_sections_without_headings() {
        let html = r#"
            <nav id="main-nav"><a href="/">Home</a></nav>
            <article><h2>News</h2><p>x</p></article>
            <aside><div><h3>Related</h3></div></aside>
            <section><p>Untitled</p></section>
        "#;
        let findings = check(html);
        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0].message,
            "AAA: <nav> element (id='main-nav') should have a heading to identify its purpose"
        );
        assert!(findings[1].message.contains("<section> element (id='unknown')"));
    }
}
