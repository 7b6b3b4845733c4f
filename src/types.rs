#![forbid(unsafe_code)]

//! Core domain types for ruleconv
//!
//! This module defines the small closed sets of values used throughout the
//! conversion pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag value marking a composite (boolean) rule
pub const LOGICAL_TAG: &str = "logical";

/// Discriminator of a rule item
///
/// An absent tag denotes a plain field rule. Any tag other than `"logical"`
/// is preserved verbatim so it can be reported as malformed IR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RuleType {
    /// Plain field rule (no tag)
    #[default]
    Plain,
    /// Composite/boolean rule (`"logical"`)
    Logical,
    /// Any other tag
    Unknown(String),
}

impl RuleType {
    /// Classifies an optional raw tag
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None => RuleType::Plain,
            Some(LOGICAL_TAG) => RuleType::Logical,
            Some(other) => RuleType::Unknown(other.to_string()),
        }
    }

    /// Returns the raw tag, or None for plain rules
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            RuleType::Plain => None,
            RuleType::Logical => Some(LOGICAL_TAG),
            RuleType::Unknown(tag) => Some(tag),
        }
    }
}

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Returns the lowercase marker printed in front of a diagnostic
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output framing for an exported rule set
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `payload:` list in YAML (rule-provider file)
    #[default]
    Yaml,
    /// `{"payload": [...]}` in JSON
    Json,
    /// One rule per line
    Text,
}

/// Color output options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Color when stderr is a terminal
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
