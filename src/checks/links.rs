// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link context check - WCAG 2.4.9 Link Purpose (Link Only) (Level AAA)
//!
//! At AAA the purpose of a link must be clear from its text alone. Links
//! with a real target (non-empty `href` that is not an in-page fragment)
//! are reported when their text is a stock vague phrase or shorter than
//! three characters.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::{truncate_chars, Document};
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Link texts that need surrounding context to make sense
const VAGUE_LINK_TEXTS: &[&str] = &[
    "click here",
    "here",
    "more",
    "read more",
    "link",
    "this",
    "continue",
    "next",
    "previous",
];

/// Short link texts that are still meaningful
const SHORT_TEXT_ALLOWED: &[&str] = &["go", "ok"];

const MIN_LINK_TEXT_CHARS: usize = 3;

/// Characters of the href quoted in a message
const HREF_EXCERPT_CHARS: usize = 60;

/// Check for link text that does not stand on its own
pub struct LinkContextCheck;

impl Check for LinkContextCheck {
    fn name(&self) -> &str {
        "Link Context"
    }

    fn category(&self) -> Category {
        Category::LinkContext
    }

    fn applies_to_level(&self, level: ConformanceLevel) -> bool {
        level == ConformanceLevel::AAA
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let mut findings = Vec::new();

        for link in document.elements_by_tag(&["a"])? {
            let href = link.attribute("href").unwrap_or("");
            if href.is_empty() || href.starts_with('#') {
                continue;
            }

            let text = link.text_content().to_lowercase();
            let href = truncate_chars(href, HREF_EXCERPT_CHARS);

            let message = if VAGUE_LINK_TEXTS.contains(&text.as_str()) {
                format!(
                    "AAA: Link text '{}' needs context. Link purpose should be clear from text alone | href='{}'",
                    text, href
                )
            } else if text.chars().count() < MIN_LINK_TEXT_CHARS
                && !SHORT_TEXT_ALLOWED.contains(&text.as_str())
            {
                format!(
                    "AAA: Link text too short: '{}'. Make link purpose clear from text | href='{}'",
                    text, href
                )
            } else {
                continue;
            };

            findings.push(
                Finding::new(Category::LinkContext, message)
                    .with_snippet(link.snippet(config.snippet_limit)),
            );
        }

        Ok(findings)
    }
}
