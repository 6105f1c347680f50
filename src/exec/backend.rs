// src/exec/backend.rs

//! Pluggable launcher abstraction.
//!
//! The runner talks to a `Launcher` instead of `tokio::process::Command`
//! directly. This makes it easy to swap in a recording launcher in tests
//! while keeping the production spawn path in [`TokioLauncher`].
//!
//! - `TokioLauncher` is the default implementation used by `fdb-harness`.
//!   It spawns a real OS process with piped stdout/stderr.
//! - Tests can provide their own `Launcher` that, for example, records the
//!   argv it was given and never touches the OS.

use std::process::Stdio;

use tokio::process::Command;
use tokio::runtime::Handle;
use tracing::debug;

use crate::errors::{HarnessError, Result};
use crate::exec::handle::ProcessHandle;

/// Trait abstracting how a tokenized argv becomes a running process.
pub trait Launcher: Send + Sync {
    /// What the caller gets back for a launched process.
    type Handle;

    /// Start `argv[0]` with `argv[1..]` as arguments and return immediately.
    ///
    /// `argv` is never empty; the runner rejects empty command lines before
    /// calling this.
    fn launch(&self, argv: Vec<String>) -> Result<Self::Handle>;
}

/// Real launcher used in production.
///
/// Must be called from within a Tokio runtime; without one, `launch` fails
/// with `SpawnFailed`. Children are not killed when their handle is dropped;
/// they run on independently of the harness.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLauncher;

impl Launcher for TokioLauncher {
    type Handle = ProcessHandle;

    fn launch(&self, argv: Vec<String>) -> Result<ProcessHandle> {
        let (program, rest) = argv.split_first().ok_or_else(|| {
            HarnessError::MalformedCommandLine {
                line: String::new(),
                reason: "command line is empty".to_string(),
            }
        })?;

        // Piped stdio registers with the reactor, which panics outside a runtime.
        if Handle::try_current().is_err() {
            return Err(HarnessError::SpawnFailed {
                path: program.clone(),
                source: std::io::Error::other("no Tokio runtime is running"),
            });
        }

        let mut cmd = Command::new(program);
        cmd.args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false);

        let child = cmd
            .spawn()
            .map_err(|e| HarnessError::from_spawn(program.as_str(), e))?;

        debug!(pid = ?child.id(), program = %program, "process spawned");

        Ok(ProcessHandle::new(argv, child))
    }
}
