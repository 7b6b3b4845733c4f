#![forbid(unsafe_code)]

//! Structured markup sink
//!
//! Wraps the line list as the single value under `payload`:
//!
//! ```yaml
//! payload:
//! - example.com
//! - +.example.org
//! ```

use crate::error::ConvertError;
use crate::output::LineSink;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Top-level key holding the rule lines
pub const PAYLOAD_KEY: &str = "payload";

/// Markup language used by a [`StructuredSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Yaml,
    Json,
}

/// Decoded structured document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub payload: Vec<String>,
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    payload: &'a [String],
}

/// Encodes `{ payload: [...] }` through a serde encoder
#[derive(Debug, Clone, Copy)]
pub struct StructuredSink {
    markup: Markup,
}

impl StructuredSink {
    pub fn new(markup: Markup) -> Self {
        Self { markup }
    }
}

impl LineSink for StructuredSink {
    fn write_lines(&self, lines: &[String], writer: &mut dyn Write) -> Result<(), ConvertError> {
        let document = PayloadRef { payload: lines };
        match self.markup {
            Markup::Yaml => serde_yaml::to_writer(&mut *writer, &document)
                .map_err(|e| ConvertError::Encode(e.to_string()))?,
            Markup::Json => {
                serde_json::to_writer_pretty(&mut *writer, &document)
                    .map_err(|e| ConvertError::Encode(e.to_string()))?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
