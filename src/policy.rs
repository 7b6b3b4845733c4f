#![forbid(unsafe_code)]

//! Capability policy: what happens when a construct cannot be represented
//!
//! A conversion between dialects with unequal feature sets hits two kinds of
//! gaps. Degradable gaps go through [`CapabilityPolicy::incapable_input`] or
//! [`CapabilityPolicy::incapable_output`]: fatal in pedantic mode, a warning
//! otherwise. Structural gaps (a construct the target family can never
//! express) are built with [`CapabilityPolicy::structural_output`] and are
//! fatal in every mode.
//!
//! The policy is a plain value fixed for the duration of one run and handed to
//! the loader and exporter when they are constructed.

use crate::diagnostics::Diagnostics;
use crate::error::CapabilityError;
use std::fmt;

/// Side of a conversion on which a gap was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Reading the source document into IR
    Input,
    /// Rendering IR into the target dialect
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => f.write_str("input"),
            Side::Output => f.write_str("output"),
        }
    }
}

/// Whether a gap may be degraded to a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapKind {
    /// Feature gap; the offending fragment can be dropped under a lenient policy
    Degradable,
    /// The construct cannot exist in the target family; always fatal
    Structural,
}

/// Strict/lenient switch for capability gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityPolicy {
    pedantic: bool,
}

impl CapabilityPolicy {
    /// Creates a policy; `pedantic = true` makes every gap fatal
    pub fn new(pedantic: bool) -> Self {
        Self { pedantic }
    }

    /// Pedantic policy: gaps fail the run
    pub fn strict() -> Self {
        Self::new(true)
    }

    /// Lenient policy: degradable gaps become warnings
    pub fn lenient() -> Self {
        Self::new(false)
    }

    /// Returns true if degradable gaps are fatal
    pub fn is_pedantic(&self) -> bool {
        self.pedantic
    }

    /// Escalate a gap found while reading input
    ///
    /// # Errors
    ///
    /// Returns a degradable `CapabilityError` in pedantic mode. Otherwise emits
    /// one warning carrying `reason` and returns `Ok(())`.
    pub fn incapable_input(
        &self,
        reason: impl Into<String>,
        diagnostics: &dyn Diagnostics,
    ) -> Result<(), CapabilityError> {
        self.escalate(Side::Input, reason.into(), diagnostics)
    }

    /// Escalate a gap found while rendering output
    ///
    /// # Errors
    ///
    /// Returns a degradable `CapabilityError` in pedantic mode. Otherwise emits
    /// one warning carrying `reason` and returns `Ok(())`.
    pub fn incapable_output(
        &self,
        reason: impl Into<String>,
        diagnostics: &dyn Diagnostics,
    ) -> Result<(), CapabilityError> {
        self.escalate(Side::Output, reason.into(), diagnostics)
    }

    /// Build the error for an output construct the target can never express
    ///
    /// Independent of the policy mode.
    pub fn structural_output(reason: impl Into<String>) -> CapabilityError {
        CapabilityError::new(Side::Output, GapKind::Structural, reason)
    }

    fn escalate(
        &self,
        side: Side,
        reason: String,
        diagnostics: &dyn Diagnostics,
    ) -> Result<(), CapabilityError> {
        if self.pedantic {
            return Err(CapabilityError::new(side, GapKind::Degradable, reason));
        }
        tracing::debug!(%side, %reason, "capability gap degraded to warning");
        diagnostics.warn(&reason);
        Ok(())
    }
}
