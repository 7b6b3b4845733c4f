//! Error types for ruleconv
//!
//! This module defines the error types used throughout ruleconv, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use crate::policy::{GapKind, Side};

/// Key registry errors
///
/// Duplicate registration is a setup-time programmer error; an unsupported
/// key surfaces at lookup time when no fallback is configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A key was registered twice in the same registry
    #[error("duplicate key in registry: {0}")]
    DuplicateKey(String),

    /// A key has no binding and the registry has no fallback
    #[error("unsupported key: {0}")]
    UnsupportedKey(String),
}

/// Structural IR errors
///
/// The IR violates the data model. These are never policy-gated.
#[derive(Debug, thiserror::Error)]
pub enum IrError {
    /// A rule item carries a type tag outside the known set
    #[error("unexpected rule type: {0}")]
    UnexpectedType(String),

    /// The IR document does not have the expected shape
    #[error("malformed IR: {0}")]
    Malformed(String),

    /// The IR document is not valid JSON
    #[error("invalid IR document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A construct that is valid IR but not representable on one side of a conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("incapable {side}: {reason}")]
pub struct CapabilityError {
    /// Which side of the conversion could not represent the construct
    pub side: Side,

    /// Whether the gap could have been degraded under a lenient policy
    pub kind: GapKind,

    /// Human-readable reason
    pub reason: String,
}

impl CapabilityError {
    /// Creates a new capability error
    pub fn new(side: Side, kind: GapKind, reason: impl Into<String>) -> Self {
        Self {
            side,
            kind,
            reason: reason.into(),
        }
    }

    /// Returns true if this gap is fatal regardless of policy
    pub fn is_structural(&self) -> bool {
        self.kind == GapKind::Structural
    }
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds an invalid value
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level error type for ruleconv
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Structural IR error
    #[error(transparent)]
    Ir(#[from] IrError),

    /// Capability error
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The output sink failed to encode the payload
    #[error("failed to encode output: {0}")]
    Encode(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
