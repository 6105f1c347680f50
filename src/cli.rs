// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `fdb-harness`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fdb-harness",
    version,
    about = "Launch the fdb executable under test with configured flags and arguments.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the executable under test.
    ///
    /// Overrides `[harness].executable` from the config file.
    #[arg(value_name = "EXECUTABLE")]
    pub executable: Option<String>,

    /// Path to the harness config file (TOML).
    ///
    /// Default: `FdbHarness.toml` in the current working directory, if it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Launch only this named invocation.
    #[arg(long, value_name = "NAME")]
    pub invocation: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FDB_HARNESS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the assembled command lines, but don't launch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
