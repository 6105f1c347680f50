// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::command::CommandSpec;
use crate::config::{HarnessConfig, load_optional};
use crate::exec::ProcessRunner;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI merge
/// - invocation selection
/// - the process runner
///
/// Every selected invocation is launched and left running; the harness never
/// waits on, reads from, or judges the processes it starts.
pub async fn run(args: CliArgs) -> Result<()> {
    let raw = load_optional(args.config.as_deref()).context("loading harness config")?;
    let cfg = HarnessConfig::resolve(args.executable.clone(), raw)?;

    if !Path::new(cfg.executable()).exists() {
        warn!(executable = %cfg.executable(), "executable does not exist on disk");
    }

    let commands = select_commands(&cfg, args.invocation.as_deref())?;

    if args.dry_run {
        write_dry_run(&mut io::stdout().lock(), &cfg, &commands)?;
        return Ok(());
    }

    let runner = ProcessRunner::new();
    for (name, spec) in commands.iter() {
        let handle = runner
            .run(spec)
            .with_context(|| format!("launching invocation '{name}'"))?;
        info!(invocation = %name, pid = ?handle.id(), "invocation started");
    }

    Ok(())
}

/// Pick the invocations to launch: the one named on the CLI, or all of them.
fn select_commands(
    cfg: &HarnessConfig,
    only: Option<&str>,
) -> Result<Vec<(String, CommandSpec)>> {
    match only {
        Some(name) => {
            let spec = cfg.command_for(name).ok_or_else(|| {
                anyhow!(
                    "unknown invocation '{}' (known: {})",
                    name,
                    cfg.invocation_names().collect::<Vec<_>>().join(", ")
                )
            })?;
            Ok(vec![(name.to_string(), spec)])
        }
        None => Ok(cfg
            .commands()
            .map(|(name, spec)| (name.to_string(), spec))
            .collect()),
    }
}

/// Simple dry-run output: the executable and each command line.
fn write_dry_run(
    out: &mut dyn Write,
    cfg: &HarnessConfig,
    commands: &[(String, CommandSpec)],
) -> io::Result<()> {
    writeln!(out, "fdb-harness dry-run")?;
    writeln!(out, "  executable = {}", cfg.executable())?;
    writeln!(out)?;

    writeln!(out, "invocations ({}):", commands.len())?;
    for (name, spec) in commands {
        writeln!(out, "  - {name}")?;
        writeln!(out, "      cmd: {}", spec.command_line())?;
    }
    Ok(())
}
