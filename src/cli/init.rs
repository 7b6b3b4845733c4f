//! Initialize a ruleconv configuration
//!
//! Writes a commented default ruleconv.toml.

use crate::config::ruleconv_toml::CONFIG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};

/// Default content for ruleconv.toml
pub const DEFAULT_CONFIG_TOML: &str = r#"[ruleconv]
version = "1"

[policy]
# Fail on every construct the target cannot represent instead of
# warning and dropping it. Logical rules fail in every mode.
pedantic = false

[output]
# yaml | json | text
format = "yaml"
# auto | always | never
color = "auto"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Refusing to overwrite without --force
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

/// What init did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
}

/// Run the init command in the current directory
pub fn run_init(force: bool) -> Result<InitOutcome, InitError> {
    init_in(Path::new("."), force)
}

/// Write ruleconv.toml into `dir`
///
/// # Errors
///
/// Returns `InitError::AlreadyExists` if the file exists and `force` is
/// false, `InitError::Io` if writing fails.
pub fn init_in(dir: &Path, force: bool) -> Result<InitOutcome, InitError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let outcome = if path.exists() {
        if !force {
            return Err(InitError::AlreadyExists(path));
        }
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    };
    fs::write(&path, DEFAULT_CONFIG_TOML)?;
    Ok(outcome)
}
