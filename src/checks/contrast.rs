// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast check - WCAG 1.4.3 Contrast Minimum (AA), 1.4.6 Contrast
//! Enhanced (AAA)
//!
//! Looks at inline `style` attributes that declare both `color` and
//! `background-color` as hex values. Thresholds: AA 4.5:1, AAA 7:1.
//! Every element is held to the normal-text threshold since inline styles
//! give no dependable font size.

use crate::checks::Check;
use crate::color::{color_contrast, parse_color};
use crate::config::ScanConfig;
use crate::document::{excerpt, Document};
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Check for low text/background contrast in inline styles
pub struct ContrastCheck;

impl Check for ContrastCheck {
    fn name(&self) -> &str {
        "Color Contrast"
    }

    fn category(&self) -> Category {
        Category::Contrast
    }

    fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
        true // AA minimum, AAA enhanced
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let min_ratio = config.level.min_contrast_ratio();
        let mut findings = Vec::new();

        for element in document.elements_with_attribute("style")? {
            let style = element.attribute("style").unwrap_or("");

            let (Some(fg), Some(bg)) = (
                declaration(style, "color"),
                declaration(style, "background-color"),
            ) else {
                continue;
            };

            // Anything but hex is skipped silently
            let (Some(fg), Some(bg)) = (parse_color(fg), parse_color(bg)) else {
                continue;
            };

            let ratio = color_contrast(fg, bg);
            if ratio >= min_ratio {
                continue;
            }

            let text = excerpt(&element.text_content(), config.text_excerpt_limit);
            findings.push(
                Finding::new(
                    Category::Contrast,
                    format!(
                        "Low contrast ({} Level) (ratio {:.2}, needs {:.1}:1) for text: '{}' | style='{}'",
                        config.level, ratio, min_ratio, text, style
                    ),
                )
                .with_snippet(element.snippet(config.snippet_limit)),
            );
        }

        Ok(findings)
    }
}

/// Value of the last declaration of `property` in an inline style
fn declaration<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case(property))
        .map(|(_, value)| value.trim())
        .last()
}
