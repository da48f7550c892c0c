// SPDX-License-Identifier: PMPL-1.0-or-later
//! Abbreviation check - WCAG 3.1.4 Abbreviations (Level AAA)
//!
//! Two passes:
//! - every `<abbr>` needs a `title` carrying the expansion
//! - well-known abbreviations in running text should be marked up with
//!   `<abbr>`; these are reported together in one finding

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};
use regex::Regex;
use std::collections::HashSet;

/// Abbreviations common enough to flag when left unmarked
const COMMON_ABBREVIATIONS: &[&str] = &[
    "HTML", "CSS", "API", "URL", "HTTP", "HTTPS", "PDF", "XML", "JSON", "SQL", "USA", "UK", "EU",
    "AI", "ML", "NLP",
];

/// Maximum unmarked abbreviations listed
const MAX_UNMARKED: usize = 5;

/// Check for abbreviations without an expansion
pub struct AbbreviationCheck;

impl Check for AbbreviationCheck {
    fn name(&self) -> &str {
        "Abbreviations"
    }

    fn category(&self) -> Category {
        Category::Abbreviations
    }

    fn applies_to_level(&self, level: ConformanceLevel) -> bool {
        level == ConformanceLevel::AAA
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let mut findings = Vec::new();
        let abbr_elements = document.elements_by_tag(&["abbr"])?;

        for abbr in &abbr_elements {
            if abbr.has_attribute_value("title") {
                continue;
            }
            findings.push(
                Finding::new(
                    Category::Abbreviations,
                    format!(
                        "AAA: <abbr> tag '{}' missing title attribute to provide expansion",
                        abbr.text_content()
                    ),
                )
                .with_snippet(abbr.snippet(config.snippet_limit)),
            );
        }

        let marked: HashSet<String> = abbr_elements.iter().map(|a| a.text_content()).collect();
        let text = document.text_content();
        let unmarked = unmarked_abbreviations(&text, &marked)?;

        if !unmarked.is_empty() {
            findings.push(Finding::new(
                Category::Abbreviations,
                format!(
                    "AAA: Found potential abbreviations that should use <abbr> tag: {}",
                    unmarked.join(", ")
                ),
            ));
        }

        Ok(findings)
    }
}

/// Known abbreviations in `text` that no `<abbr>` already spells out,
/// first-seen order, without repeats, at most [`MAX_UNMARKED`].
///
/// The cap counts reported abbreviations only. All-caps words outside
/// the known list (`NOTE`, `WARNING`) never use up a slot, so an `API`
/// after five of them is still reported.
fn unmarked_abbreviations<'t>(
    text: &'t str,
    marked: &HashSet<String>,
) -> Result<Vec<&'t str>, CheckError> {
    let caps_word = Regex::new(r"\b[A-Z]{2,}\b")?;
    let mut found: Vec<&str> = Vec::new();

    for token in caps_word.find_iter(text).map(|m| m.as_str()) {
        if found.len() == MAX_UNMARKED {
            break;
        }
        if COMMON_ABBREVIATIONS.contains(&token)
            && !marked.contains(token)
            && !found.contains(&token)
        {
            found.push(token);
        }
    }

    Ok(found)
}
