//! Export command implementation
//!
//! This module implements the `ruleconv export` command, which:
//! - Resolves the configuration and the capability policy for the run
//! - Decodes the IR document
//! - Renders it as a meta-domain rule set into memory
//! - Writes the rendered bytes to the output file or stdout
//!
//! Rendering completes before the destination is touched, so a failing run
//! leaves no partial output behind.

use crate::cli::common::{self, EXIT_SUCCESS};
use crate::diagnostics::{Diagnostics, StderrDiagnostics};
use crate::error::ConvertError;
use crate::export::{Exporter, MetaDomainExporter};
use crate::ir;
use crate::config::Config;
use crate::policy::CapabilityPolicy;
use crate::types::{ColorOption, OutputFormat};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Input path meaning stdin
pub const STDIN_PATH: &str = "-";

/// Options of one export run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub input: String,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub pedantic: bool,
    pub lenient: bool,
    pub config: Option<PathBuf>,
    pub color: Option<ColorOption>,
}

/// Run the export command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: A construct could not be represented
/// - 2: Error (configuration/I/O/encoding error)
/// - 3: Malformed IR or configuration syntax
pub fn run_export(options: &ExportOptions) -> i32 {
    let config = match common::resolve_config(options.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let error = ConvertError::from(e);
            StderrDiagnostics::new(options.color.unwrap_or_default()).error(&error.to_string());
            return common::exit_code_for(&error);
        }
    };

    let diagnostics = StderrDiagnostics::new(options.color.unwrap_or(config.output.color));
    let policy = resolve_policy(options, &config);
    let format = options.format.unwrap_or(config.output.format);

    match run_export_inner(options, format, policy, &diagnostics) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            diagnostics.error(&e.to_string());
            common::exit_code_for(&e)
        }
    }
}

/// `--pedantic` and `--lenient` override the config file in either direction
fn resolve_policy(options: &ExportOptions, config: &Config) -> CapabilityPolicy {
    if options.pedantic {
        CapabilityPolicy::strict()
    } else if options.lenient {
        CapabilityPolicy::lenient()
    } else {
        config.capability_policy()
    }
}

fn run_export_inner(
    options: &ExportOptions,
    format: OutputFormat,
    policy: CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<(), ConvertError> {
    let document = read_input(&options.input)?;
    let rendered = render_document(&document, format, policy, diagnostics)?;
    write_output(options.output.as_deref(), &rendered)
}

/// Decode an IR document and render it as a meta-domain rule set
///
/// # Errors
///
/// Returns the first loader or exporter error.
pub fn render_document(
    document: &str,
    format: OutputFormat,
    policy: CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<u8>, ConvertError> {
    let ir = ir::from_json_str(document, &policy, diagnostics)?;
    let exporter = MetaDomainExporter::new(ir, format, policy, diagnostics)?;
    let mut rendered = Vec::new();
    exporter.export(&mut rendered)?;
    Ok(rendered)
}

fn read_input(input: &str) -> Result<String, ConvertError> {
    if input == STDIN_PATH {
        let document = io::read_to_string(io::stdin().lock())?;
        return Ok(document);
    }
    Ok(fs::read_to_string(input)?)
}

fn write_output(output: Option<&Path>, rendered: &[u8]) -> Result<(), ConvertError> {
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
