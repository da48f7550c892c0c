// SPDX-License-Identifier: PMPL-1.0-or-later
//! Language attribute check - WCAG 3.1.1 Language of Page, reported with
//! the AAA set
//!
//! An `<html>` tag written in the source needs a non-empty `lang`.
//! Fragments without an `<html>` tag are not reported.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::Document;
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Check for a missing page language
pub struct LanguageAttributeCheck;

impl Check for LanguageAttributeCheck {
    fn name(&self) -> &str {
        "Language Attributes"
    }

    fn category(&self) -> Category {
        Category::LanguageAttributes
    }

    fn applies_to_level(&self, level: ConformanceLevel) -> bool {
        level == ConformanceLevel::AAA
    }

    fn run(&self, document: &Document, _config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        if !document.has_html_tag() || document.root().has_attribute_value("lang") {
            return Ok(Vec::new());
        }

        Ok(vec![Finding::new(
            Category::LanguageAttributes,
            "Missing 'lang' attribute on <html> tag - required for screen readers",
        )])
    }
}
