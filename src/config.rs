// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan configuration.
//!
//! A [`ScanConfig`] is built once by the caller (from defaults, a TOML
//! file, and CLI overrides) and passed by reference to the scanner and
//! every check.

use crate::error::{Result, ScanError};
use crate::finding::ConformanceLevel;
use serde::Deserialize;
use std::path::Path;

/// Settings for one scan run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Conformance level to check against
    pub level: ConformanceLevel,
    /// Maximum characters of element markup kept in a finding
    pub snippet_limit: usize,
    /// Maximum characters of element text quoted in a message
    pub text_excerpt_limit: usize,
    /// Treat recoverable HTML parse errors as fatal
    pub strict_parsing: bool,
    /// File extensions picked up by directory scans
    pub extensions: Vec<String>,
    /// Directory names skipped by directory scans
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            level: ConformanceLevel::AAA,
            snippet_limit: 200,
            text_excerpt_limit: 80,
            strict_parsing: false,
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["html", "htm", "xhtml"].iter().map(|s| s.to_string()).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", ".git", "target", "dist", "build", "vendor"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl ScanConfig {
    /// Defaults at the given level
    pub fn with_level(level: ConformanceLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Reject settings no scan could run with
    pub fn validate(&self) -> Result<()> {
        if self.snippet_limit == 0 {
            return Err(ScanError::Config("snippet_limit must be greater than 0".into()));
        }
        if self.text_excerpt_limit == 0 {
            return Err(ScanError::Config(
                "text_excerpt_limit must be greater than 0".into(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(ScanError::Config("extensions must not be empty".into()));
        }
        Ok(())
    }

    /// Whether a file extension is scanned (case-insensitive)
    pub fn is_scannable_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether a directory name is skipped
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<ScanConfig> {
    let config: ScanConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file. A missing file yields defaults.
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    if !path.exists() {
        return Ok(ScanConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
