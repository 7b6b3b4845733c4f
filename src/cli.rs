//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod export;
pub mod init;

// Re-export types for convenient access
pub use args::{Cli, Command};
pub use export::{ExportOptions, run_export};
