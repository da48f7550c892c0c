// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` needs a non-blank `alt`. An explicit `alt=""` is reported
//! the same way as a missing attribute: decorative images are not told
//! apart from informative ones.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Check for images without alt text
pub struct ImageAltCheck;

impl Check for ImageAltCheck {
    fn name(&self) -> &str {
        "Image Alt Text"
    }

    fn category(&self) -> Category {
        Category::Images
    }

    fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
        true // Level A applies to all
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let mut findings = Vec::new();

        for img in document.elements_by_tag(&["img"])? {
            if img.non_empty_attribute("alt").is_some() {
                continue;
            }

            let snippet = img.snippet(config.snippet_limit);
            findings.push(
                Finding::new(
                    Category::Images,
                    format!("Image with missing/empty alt: {}...", snippet),
                )
                .with_snippet(snippet),
            );
        }

        Ok(findings)
    }
}
