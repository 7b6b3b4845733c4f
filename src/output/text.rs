#![forbid(unsafe_code)]

//! Flat text sink: one rule per line

use crate::error::ConvertError;
use crate::output::LineSink;
use std::io::Write;

/// Writes lines joined by `\n`, without a trailing newline
///
/// An empty line list writes nothing, so splitting the output of an empty
/// rule set on `\n` yields one empty string rather than no lines. Lines must
/// not contain line breaks themselves; the exporter filters those out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSink;

impl TextSink {
    pub fn new() -> Self {
        TextSink
    }
}

impl LineSink for TextSink {
    fn write_lines(&self, lines: &[String], writer: &mut dyn Write) -> Result<(), ConvertError> {
        writer.write_all(lines.join("\n").as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
