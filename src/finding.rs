// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding and report types shared by the checks, the scanner and the
//! report renderers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// WCAG conformance level a scan is run against
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConformanceLevel {
    /// Level AA - standard conformance
    #[serde(alias = "aa")]
    AA,
    /// Level AAA - enhanced conformance
    #[default]
    #[serde(alias = "aaa")]
    AAA,
}

impl ConformanceLevel {
    /// Minimum contrast ratio for normal-size text
    pub fn min_contrast_ratio(self) -> f64 {
        match self {
            ConformanceLevel::AA => 4.5,
            ConformanceLevel::AAA => 7.0,
        }
    }

    /// Minimum contrast ratio for large text (18pt, or 14pt bold).
    ///
    /// Not applied by the contrast check: inline styles carry no reliable
    /// font-size information, so every element is held to the normal-text
    /// threshold.
    pub fn min_contrast_ratio_large(self) -> f64 {
        match self {
            ConformanceLevel::AA => 3.0,
            ConformanceLevel::AAA => 4.5,
        }
    }
}

impl std::fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConformanceLevel::AA => write!(f, "AA"),
            ConformanceLevel::AAA => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for ConformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AA" => Ok(ConformanceLevel::AA),
            "AAA" => Ok(ConformanceLevel::AAA),
            other => Err(format!("Unknown conformance level: {}", other)),
        }
    }
}

/// Report category. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Images,
    Inputs,
    Contrast,
    Headings,
    LanguageAttributes,
    LinkContext,
    SectionHeadings,
    Abbreviations,
    UnusualWords,
}

impl Category {
    /// Categories checked at every level
    pub const BASELINE: [Category; 4] = [
        Category::Images,
        Category::Inputs,
        Category::Contrast,
        Category::Headings,
    ];

    /// Categories only checked at Level AAA
    pub const AAA_ONLY: [Category; 5] = [
        Category::LanguageAttributes,
        Category::LinkContext,
        Category::SectionHeadings,
        Category::Abbreviations,
        Category::UnusualWords,
    ];

    /// Stable key used in JSON output
    pub fn key(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Inputs => "inputs",
            Category::Contrast => "contrast",
            Category::Headings => "headings",
            Category::LanguageAttributes => "language_attributes",
            Category::LinkContext => "link_context",
            Category::SectionHeadings => "section_headings",
            Category::Abbreviations => "abbreviations",
            Category::UnusualWords => "unusual_words",
        }
    }

    /// Section title for human-readable reports
    pub fn title(self) -> &'static str {
        match self {
            Category::Images => "Images missing alt text",
            Category::Inputs => "Inputs without labels",
            Category::Contrast => "Low color contrast",
            Category::Headings => "Heading structure issues",
            Category::LanguageAttributes => "Language attributes",
            Category::LinkContext => "Link purpose (link text alone)",
            Category::SectionHeadings => "Section headings",
            Category::Abbreviations => "Abbreviations",
            Category::UnusualWords => "Unusual words",
        }
    }

    /// WCAG success criterion this category reports against
    pub fn wcag_criterion(self) -> &'static str {
        match self {
            Category::Images => "1.1.1 Non-text Content (A)",
            Category::Inputs => "3.3.2 Labels or Instructions (A)",
            Category::Contrast => "1.4.3 Contrast Minimum (AA) / 1.4.6 Contrast Enhanced (AAA)",
            Category::Headings => "1.3.1 Info and Relationships (A)",
            Category::LanguageAttributes => "3.1.1 Language of Page (A)",
            Category::LinkContext => "2.4.9 Link Purpose, Link Only (AAA)",
            Category::SectionHeadings => "2.4.10 Section Headings (AAA)",
            Category::Abbreviations => "3.1.4 Abbreviations (AAA)",
            Category::UnusualWords => "3.1.3 Unusual Words (AAA)",
        }
    }

    /// Categories present in a report at the given level
    pub fn for_level(level: ConformanceLevel) -> Vec<Category> {
        let mut categories = Category::BASELINE.to_vec();
        if level == ConformanceLevel::AAA {
            categories.extend(Category::AAA_ONLY);
        }
        categories
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single accessibility defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Category this finding belongs to
    pub category: Category,
    /// Human-readable message
    pub message: String,
    /// Truncated source markup of the offending element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Set when the finding is a placeholder for a check that failed
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub internal_error: bool,
}

impl Finding {
    /// Create a new finding
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            snippet: None,
            internal_error: false,
        }
    }

    /// Diagnostic placeholder for a check that could not complete
    pub fn check_failed(category: Category, check: &str, reason: &str) -> Self {
        Self {
            internal_error: true,
            ..Self::new(category, format!("Check '{}' failed: {}", check, reason))
        }
    }

    /// Attach a source snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Findings grouped by category, in category order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuesReport {
    categories: BTreeMap<Category, Vec<Finding>>,
}

impl IssuesReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a report with an empty entry for every category of `level`
    pub fn for_level(level: ConformanceLevel) -> Self {
        let categories = Category::for_level(level)
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();
        Self { categories }
    }

    /// Replace the findings of a category
    pub fn insert(&mut self, category: Category, findings: Vec<Finding>) {
        self.categories.insert(category, findings);
    }

    /// Findings of one category, `None` if the category was not checked
    pub fn get(&self, category: Category) -> Option<&[Finding]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// Whether the category was checked
    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    /// Checked categories in report order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Iterate over (category, findings) in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Finding])> {
        self.categories.iter().map(|(c, f)| (*c, f.as_slice()))
    }

    /// Number of checked categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total findings across all categories
    pub fn total_findings(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True when no category holds a finding
    pub fn is_clean(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Whether any category is a placeholder for a failed check
    pub fn has_internal_errors(&self) -> bool {
        self.categories
            .values()
            .flatten()
            .any(|f| f.internal_error)
    }
}
