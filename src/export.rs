#![forbid(unsafe_code)]

//! Rule set exporters
//!
//! An exporter owns one IR and renders it into a target dialect.

pub mod metadomain;

use crate::error::ConvertError;
use std::io::Write;

pub use metadomain::{FieldHandler, MetaDomainExporter, Translator};

/// Renders a held IR into a writable stream
pub trait Exporter {
    /// Write the rendered rule set to `writer`
    ///
    /// Nothing is written unless the whole IR translated successfully.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` for malformed IR, unrepresentable constructs
    /// (subject to the capability policy), or a failing sink.
    fn export(&self, writer: &mut dyn Write) -> Result<(), ConvertError>;
}
