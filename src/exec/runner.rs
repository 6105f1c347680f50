// src/exec/runner.rs

use std::io::{self, Write};

use tracing::{debug, info};

use crate::command::{CommandSpec, Flag};
use crate::errors::Result;
use crate::exec::backend::{Launcher, TokioLauncher};
use crate::exec::handle::ProcessHandle;

/// Turns a [`CommandSpec`] into a running process.
///
/// For every call the runner:
/// 1. renders the command line (executable, flags, positional args),
/// 2. prints `Running:` and the line to stdout (or the writer given to
///    [`ProcessRunner::run_logged`]),
/// 3. splits the line with shell word rules,
/// 4. hands argv to its [`Launcher`] and returns the handle straight away.
///
/// It keeps no state between calls, so one runner can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner<L = TokioLauncher> {
    launcher: L,
}

impl ProcessRunner<TokioLauncher> {
    pub fn new() -> Self {
        Self {
            launcher: TokioLauncher,
        }
    }
}

impl<L: Launcher> ProcessRunner<L> {
    pub fn with_launcher(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Launch `spec` without waiting for it.
    ///
    /// Fails with `MalformedCommandLine` before launching if the line does
    /// not split, and with `ExecutableNotFound` if the executable cannot be
    /// started.
    pub fn run(&self, spec: &CommandSpec) -> Result<L::Handle> {
        self.run_logged(spec, &mut io::stdout().lock())
    }

    /// Like [`ProcessRunner::run`], writing the `Running:` line to `out`.
    pub fn run_logged(&self, spec: &CommandSpec, out: &mut dyn Write) -> Result<L::Handle> {
        let line = spec.command_line();
        writeln!(out, "Running:\n{line}")?;
        out.flush()?;

        let argv = spec.argv()?;
        debug!(?argv, "tokenized command line");

        let handle = self.launcher.launch(argv)?;
        info!(executable = %spec.executable, "launched");
        Ok(handle)
    }
}

/// One-shot helper: build a [`CommandSpec`] and launch it with the default
/// Tokio launcher.
pub fn spawn<F, A, S>(executable: &str, flags: F, args: A) -> Result<ProcessHandle>
where
    F: IntoIterator<Item = Flag>,
    A: IntoIterator<Item = S>,
    S: Into<String>,
{
    let spec = CommandSpec::new(executable).with_flags(flags).args(args);
    ProcessRunner::new().run(&spec)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::errors::HarnessError;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Vec<String>>>,
    }

    impl Launcher for Recorder {
        type Handle = usize;

        fn launch(&self, argv: Vec<String>) -> Result<usize> {
            let mut seen = self.seen.lock().unwrap();
            seen.push(argv);
            Ok(seen.len())
        }
    }

    #[test]
    fn passes_tokenized_argv_to_launcher() {
        let runner = ProcessRunner::with_launcher(Recorder::default());
        let spec = CommandSpec::new("/usr/bin/tool").flag("n", "5").arg("input");

        let handle = runner.run(&spec).unwrap();

        assert_eq!(handle, 1);
        let seen = runner.launcher().seen.lock().unwrap();
        assert_eq!(seen[0], vec!["/usr/bin/tool", "-n", "5", "input"]);
    }

    #[test]
    fn writes_running_line_before_launch() {
        let runner = ProcessRunner::with_launcher(Recorder::default());
        let spec = CommandSpec::new("/usr/bin/tool").flag("n", "5").arg("r1.fastq");
        let mut out = Vec::new();

        runner.run_logged(&spec, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Running:\n/usr/bin/tool -n 5 r1.fastq\n");
    }

    #[test]
    fn running_line_is_written_even_when_launch_fails() {
        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("/definitely/not/here/fdb");
        let mut out = Vec::new();

        // Outside a runtime the Tokio launcher refuses to spawn.
        let err = runner.run_logged(&spec, &mut out).unwrap_err();

        assert!(matches!(err, HarnessError::SpawnFailed { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "Running:\n/definitely/not/here/fdb\n");
    }

    #[test]
    fn malformed_line_never_reaches_launcher() {
        let runner = ProcessRunner::with_launcher(Recorder::default());
        let spec = CommandSpec::new("fdb").arg("\"oops");
        let mut out = Vec::new();

        let err = runner.run_logged(&spec, &mut out).unwrap_err();

        assert_eq!(String::from_utf8(out).unwrap(), "Running:\nfdb \"oops\n");
        assert!(matches!(err, HarnessError::MalformedCommandLine { .. }));
        assert!(runner.launcher().seen.lock().unwrap().is_empty());
    }

    #[test]
    fn repeated_runs_are_independent() {
        let runner = ProcessRunner::with_launcher(Recorder::default());
        let spec = CommandSpec::new("fdb").switch("v");

        let first = runner.run(&spec).unwrap();
        let second = runner.run(&spec).unwrap();

        assert_ne!(first, second);
        let seen = runner.launcher().seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);
    }
}
