#![forbid(unsafe_code)]

//! ruleconv: convert engine-agnostic domain rule sets into meta-domain syntax
//!
//! An importer produces a [`RuleIr`]; a [`MetaDomainExporter`] minifies each
//! rule item, dispatches its fields through a [`KeyRegistry`] of translators,
//! and frames the resulting lines through one of the output sinks. A
//! [`CapabilityPolicy`] decides whether constructs the target cannot express
//! fail the run or degrade to warnings.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod ir;
pub mod output;
pub mod policy;
pub mod registry;
pub mod types;

// Re-export error types for convenient access
pub use error::{CapabilityError, ConfigError, ConvertError, IrError, RegistryError};

// Re-export core domain types for convenient access
pub use diagnostics::{Diagnostic, Diagnostics, MemoryDiagnostics, StderrDiagnostics};
pub use export::{Exporter, MetaDomainExporter};
pub use ir::{Field, RuleIr, RuleItem};
pub use policy::{CapabilityPolicy, GapKind, Side};
pub use registry::{Fallback, KeyRegistry};
pub use types::{ColorOption, OutputFormat, RuleType, Severity};
