//! Common helper functions shared across CLI commands
//!
//! This module provides configuration resolution and the mapping from
//! errors to process exit codes.

use crate::config::Config;
use crate::config::ruleconv_toml::CONFIG_FILE_NAME;
use crate::error::{ConfigError, ConvertError};
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INCAPABLE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Resolve the configuration for this run
///
/// An explicit path must exist. Without one, `./ruleconv.toml` is used when
/// present and defaults apply otherwise.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed or validated.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load(path),
        None => resolve_config_in(Path::new(".")),
    }
}

fn resolve_config_in(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }
    Config::load(path)
}

/// Exit code for a failed run
///
/// Capability gaps get their own code so wrapping scripts can tell
/// "not representable" apart from broken input.
pub fn exit_code_for(error: &ConvertError) -> i32 {
    match error {
        ConvertError::Capability(_) => EXIT_INCAPABLE,
        ConvertError::Ir(_) => EXIT_PARSE_ERROR,
        ConvertError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
        ConvertError::Registry(_)
        | ConvertError::Config(_)
        | ConvertError::Encode(_)
        | ConvertError::Io(_) => EXIT_ERROR,
    }
}
