// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for finaccai

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that abort a scan (or a single document within a scan)
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTML parsing failed with {} error(s): {}", .errors.len(), .errors.join("; "))]
    Parse { errors: Vec<String> },
}

/// Errors raised inside a single check.
///
/// These never escape the aggregator; they are turned into a diagnostic
/// finding for the failing category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid pattern: {0}")]
    Pattern(String),

    #[error("{0}")]
    Internal(String),
}

impl From<regex::Error> for CheckError {
    fn from(err: regex::Error) -> Self {
        CheckError::Pattern(err.to_string())
    }
}
