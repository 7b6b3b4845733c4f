//! ruleconv CLI entry point

use clap::Parser;
use ruleconv::cli::init::{InitOutcome, run_init};
use ruleconv::cli::{Cli, Command, ExportOptions, common};
use ruleconv::{Diagnostics, StderrDiagnostics};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Export {
            input,
            output,
            format,
            pedantic,
            lenient,
            config,
        } => ruleconv::cli::run_export(&ExportOptions {
            input,
            output,
            format,
            pedantic,
            lenient,
            config,
            color: cli.color,
        }),
        Command::Init { force } => match run_init(force) {
            Ok(InitOutcome::Created) => {
                println!("Created ruleconv.toml");
                common::EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote ruleconv.toml");
                common::EXIT_SUCCESS
            }
            Err(e) => {
                StderrDiagnostics::new(cli.color.unwrap_or_default()).error(&e.to_string());
                common::EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}

/// Developer tracing on stderr, controlled by RUST_LOG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
