#![forbid(unsafe_code)]

//! Output sinks (structured markup and flat text)
//!
//! Both sinks consume the same translated line list and differ only in framing.

pub mod structured;
pub mod text;

use crate::error::ConvertError;
use crate::types::OutputFormat;
use std::io::Write;

pub use structured::{Markup, PAYLOAD_KEY, Payload, StructuredSink};
pub use text::TextSink;

/// Frames a translated line list onto a writer
pub trait LineSink {
    /// Write `lines` to `writer`
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Encode` if the payload cannot be encoded and
    /// `ConvertError::Io` if writing fails.
    fn write_lines(&self, lines: &[String], writer: &mut dyn Write) -> Result<(), ConvertError>;
}

/// Returns the sink for an output format
pub fn sink_for(format: OutputFormat) -> Box<dyn LineSink> {
    match format {
        OutputFormat::Yaml => Box::new(StructuredSink::new(Markup::Yaml)),
        OutputFormat::Json => Box::new(StructuredSink::new(Markup::Json)),
        OutputFormat::Text => Box::new(TextSink::new()),
    }
}
