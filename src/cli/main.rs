//! Schema profiler CLI.

use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::Level;

mod args;
mod commands;
mod error;
mod logging;
mod output;

use crate::args::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::headers::handle_headers;
use crate::commands::profile::{ProfilePlan, handle_profile};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        tracing::error!("{error:#}");
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Profile(args) => {
            let plan = ProfilePlan::resolve(args, cli.log_file.as_deref())
                .context("invalid profile arguments")?;

            let log_config = log_config_from_cli(cli, Some(plan.logfile.clone()));
            init_logging(&log_config).context("failed to initialize logging")?;

            handle_profile(&plan)
                .with_context(|| format!("failed to profile '{}'", plan.infile.display()))?;

            eprintln!(
                "Execution of '{}' completed",
                std::env::current_exe()
                    .map(|exe| exe.display().to_string())
                    .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string())
            );
        }
        Command::Headers(args) => {
            let log_config = log_config_from_cli(cli, cli.log_file.clone());
            init_logging(&log_config).context("failed to initialize logging")?;

            handle_headers(args)
                .with_context(|| format!("failed to read header of '{}'", args.infile.display()))?;
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli, log_file: Option<std::path::PathBuf>) -> LogConfig {
    let level = match cli.log_level {
        LogLevelArg::Error => Level::ERROR,
        LogLevelArg::Warn => Level::WARN,
        LogLevelArg::Info => Level::INFO,
        LogLevelArg::Debug => Level::DEBUG,
        LogLevelArg::Trace => Level::TRACE,
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    LogConfig {
        level,
        format,
        with_ansi: log_file.is_none() && io::stderr().is_terminal(),
        log_file,
    }
}
