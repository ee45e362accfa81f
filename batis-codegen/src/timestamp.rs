//! Timestamp formatting for generated-marker metadata.
//!
//! Formatting is a pure function of (format, instant): no formatter object
//! is retained between calls, so a configured format can be shared freely
//! across parallel per-table generation tasks.

use chrono::{
    DateTime, SecondsFormat, Utc,
    format::{Item, StrftimeItems},
};
use thiserror::Error;

/// Raised when a custom date-format pattern cannot be compiled.
///
/// Patterns are validated when configuration is loaded, never at first
/// use during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format pattern '{pattern}'")]
pub struct InvalidDateFormat {
    pub pattern: String,
}

/// Timestamp format for generated documentation and marker annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// RFC 3339 full date-time, e.g. `2026-08-07T12:00:00Z`.
    #[default]
    Iso8601,
    /// A validated strftime pattern.
    Pattern(String),
}

impl DateFormat {
    /// Compile a custom strftime pattern, rejecting invalid specifiers.
    pub fn pattern(pattern: impl Into<String>) -> Result<Self, InvalidDateFormat> {
        let pattern = pattern.into();
        let invalid = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if invalid {
            Err(InvalidDateFormat { pattern })
        } else {
            Ok(Self::Pattern(pattern))
        }
    }

    /// Format the given instant.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::Pattern(pattern) => instant.format(pattern).to_string(),
        }
    }
}
