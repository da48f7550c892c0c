// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy check - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Headings must not skip levels on the way down (h2 -> h4). Each heading
//! is compared with the one right before it, so two skips in a row are two
//! findings. Going back up (h3 -> h1) is always fine.

use crate::checks::Check;
use crate::config::ScanConfig;
use crate::document::{Document, HEADING_TAGS};
use crate::error::CheckError;
use crate::finding::{Category, ConformanceLevel, Finding};

/// Check for skipped heading levels
pub struct HeadingHierarchyCheck;

impl Check for HeadingHierarchyCheck {
    fn name(&self) -> &str {
        "Heading Hierarchy"
    }

    fn category(&self) -> Category {
        Category::Headings
    }

    fn applies_to_level(&self, _level: ConformanceLevel) -> bool {
        true // Level A
    }

    fn run(&self, document: &Document, config: &ScanConfig) -> Result<Vec<Finding>, CheckError> {
        let mut findings = Vec::new();
        let mut previous: Option<u8> = None;

        for heading in document.elements_by_tag(HEADING_TAGS)? {
            let level = heading.heading_level().ok_or_else(|| {
                CheckError::Internal(format!("<{}> is not a heading", heading.tag_name()))
            })?;

            if let Some(prev) = previous {
                if level > prev + 1 {
                    findings.push(
                        Finding::new(
                            Category::Headings,
                            format!(
                                "Skipped heading level: <h{}> follows <h{}> | text='{}'",
                                level,
                                prev,
                                heading.text_content()
                            ),
                        )
                        .with_snippet(heading.snippet(config.snippet_limit)),
                    );
                }
            }

            previous = Some(level);
        }

        Ok(findings)
    }
}
