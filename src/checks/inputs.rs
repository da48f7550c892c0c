// SPDX-License-Identifier: PMPL-1.0-or-later
//! Input labeling check - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! An `<input>` has an accessible name when any of these hold:
//! - a `<label for>` points at its id
//! - its id belongs to the first input wrapped by some `<label>`
//! - it carries a non-empty `aria-label` or `aria-labelledby` (the value
//!   itself is not validated)
//! - its type needs no label (hidden, submit, button, image, reset)

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};
use std::collections::HashSet;

/// Input types that do not need a label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "image", "reset"];

/// Check for inputs without an accessible name
pub struct InputLabelCheck;

impl Check for InputLabelCheck {
    fn name(&self) -> &str {
        "Input Labels"
    }

    fn category(&self) -> Category {
        Category::Inputs
    }

    fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
        true // Level A minimum
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let labels = document.elements_by_tag(&["label"])?;

        let label_fors: HashSet<&str> = labels
            .iter()
            .filter_map(|l| l.non_empty_attribute("for"))
            .collect();

        // Only the first input inside a label counts as wrapped
        let wrapped_ids: HashSet<&str> = labels
            .iter()
            .filter_map(|l| l.find_descendant(&["input"]))
            .filter_map(|input| input.non_empty_attribute("id"))
            .collect();

        let mut findings = Vec::new();

        for input in document.elements_by_tag(&["input"])? {
            let input_type = input.attribute("type").unwrap_or("").trim().to_lowercase();
            if EXEMPT_INPUT_TYPES.contains(&input_type.as_str()) {
                continue;
            }

            let labelled_by_id = input
                .non_empty_attribute("id")
                .is_some_and(|id| label_fors.contains(id) || wrapped_ids.contains(id));
            let has_aria_name = input.has_attribute_value("aria-label")
                || input.has_attribute_value("aria-labelledby");

            if labelled_by_id || has_aria_name {
                continue;
            }

            let snippet = input.snippet(config.snippet_limit);
            findings.push(
                Finding::new(
                    Category::Inputs,
                    format!("Input without label/aria-label: {}...", snippet),
                )
                .with_snippet(snippet),
            );
        }

        Ok(findings)
    }
}
