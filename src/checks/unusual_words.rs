// SPDX-License-Identifier: PMPL-1.0-or-later
//! Unusual words check - WCAG 3.1.3 Unusual Words (Level AAA)
//!
//! Long pages that use technical jargon should offer definitions. A page
//! with a `<dl>`, a `<dfn>`, or an element classed as a glossary or
//! definition is taken to provide them.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Pages with more words than this are checked
const WORD_THRESHOLD: usize = 500;

/// Jargon that usually warrants a definition
const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "framework",
    "methodology",
    "implementation",
    "infrastructure",
];

/// Class name fragments that mark a glossary
const GLOSSARY_CLASS_MARKERS: &[&str] = &["glossary", "definition"];

/// Terms listed in the message
const MAX_TERMS_LISTED: usize = 3;

/// Check for jargon on long pages without a glossary
pub struct UnusualWordsCheck;

impl Check for UnusualWordsCheck {
    fn name(&self) -> &str {
        "Unusual Words"
    }

    fn category(&self) -> Category {
        Category::UnusualWords
    }

    fn applies_to_level(&self, level: ConformanceLevel) -> bool {
        level == ConformanceLevel::AAA
    }

    fn run(&self, document: &Document, _config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let text = document.text_content();
        if text.split_whitespace().count() <= WORD_THRESHOLD || has_glossary(document)? {
            return Ok(Vec::new());
        }

        let lower = text.to_lowercase();
        let found: Vec<&str> = TECHNICAL_TERMS
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .take(MAX_TERMS_LISTED)
            .collect();

        if found.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![Finding::new(
            Category::UnusualWords,
            format!(
                "AAA: Page contains technical terms ({}...) but no glossary or definitions. Consider adding a glossary for unusual words.",
                found.join(", ")
            ),
        )])
    }
}

fn has_glossary(document: &Document) -> Result<bool, CheckError> {
    if document.contains(&["dl", "dfn"])? {
        return Ok(true);
    }

    Ok(document.elements_with_attribute("class")?.iter().any(|el| {
        el.classes()
            .any(|class| GLOSSARY_CLASS_MARKERS.iter().any(|m| class.contains(m)))
    }))
}
