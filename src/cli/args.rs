//! CLI argument parsing using clap

use crate::types::{ColorOption, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ruleconv CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "ruleconv")]
#[command(about = "Convert domain rule sets into meta-domain rule-provider syntax")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Diagnostic coloring (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,
}

/// Available ruleconv subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export an IR document as a meta-domain rule set
    Export {
        /// IR document (JSON); `-` reads stdin
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Fail on every capability gap instead of warning
        #[arg(long)]
        pedantic: bool,

        /// Warn on capability gaps even when the config file is pedantic
        #[arg(long, conflicts_with = "pedantic")]
        lenient: bool,

        /// Configuration file (defaults to ./ruleconv.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default ruleconv.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::parse_from(["ruleconv", "export", "rules.json"]);
        match cli.command {
            Command::Export {
                input,
                output,
                format,
                pedantic,
                lenient,
                config,
            } => {
                assert_eq!(input, "rules.json");
                assert_eq!(output, None);
                assert_eq!(format, None);
                assert!(!pedantic);
                assert!(!lenient);
                assert_eq!(config, None);
            }
            _ => panic!("Expected Export command"),
        }
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_export_all_flags() {
        let cli = Cli::parse_from([
            "ruleconv",
            "export",
            "-",
            "-o",
            "out.yaml",
            "-f",
            "text",
            "--pedantic",
            "--config",
            "alt.toml",
            "--color",
            "never",
        ]);
        match cli.command {
            Command::Export {
                input,
                output,
                format,
                pedantic,
                lenient,
                config,
            } => {
                assert_eq!(input, "-");
                assert_eq!(output, Some(PathBuf::from("out.yaml")));
                assert_eq!(format, Some(OutputFormat::Text));
                assert!(pedantic);
                assert!(!lenient);
                assert_eq!(config, Some(PathBuf::from("alt.toml")));
            }
            _ => panic!("Expected Export command"),
        }
        assert_eq!(cli.color, Some(ColorOption::Never));
    }

    #[test]
    fn test_export_requires_input() {
        assert!(Cli::try_parse_from(["ruleconv", "export"]).is_err());
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ruleconv", "export", "x.json", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_lenient_conflicts_with_pedantic() {
        let cli = Cli::parse_from(["ruleconv", "export", "x.json", "--lenient"]);
        assert!(matches!(cli.command, Command::Export { lenient: true, .. }));
        assert!(
            Cli::try_parse_from(["ruleconv", "export", "x.json", "--pedantic", "--lenient"])
                .is_err()
        );
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::parse_from(["ruleconv", "init", "--force"]);
        match cli.command {
            Command::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
