// src/exec/handle.rs

use std::process::ExitStatus;

use tokio::process::{Child, ChildStderr, ChildStdout};

use crate::errors::Result;

/// A spawned process and its output pipes.
///
/// The streams are Tokio async readers, so reading them never blocks the
/// thread. Nothing reads them unless the caller does; a process that writes
/// more than the OS pipe buffer holds will stall until someone drains it.
///
/// Dropping the handle neither kills nor waits on the process.
#[derive(Debug)]
pub struct ProcessHandle {
    argv: Vec<String>,
    child: Child,
}

impl ProcessHandle {
    pub(crate) fn new(argv: Vec<String>, child: Child) -> Self {
        Self { argv, child }
    }

    /// The argv the process was started with (`argv[0]` is the executable).
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// OS process id, or `None` once the process has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    pub fn stdout(&mut self) -> Option<&mut ChildStdout> {
        self.child.stdout.as_mut()
    }

    pub fn stderr(&mut self) -> Option<&mut ChildStderr> {
        self.child.stderr.as_mut()
    }

    /// Take ownership of the stdout pipe, e.g. to move it into a task.
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.stderr.take()
    }

    /// Non-blocking exit check.
    pub fn try_wait(&mut self) -> Result<Option<ExitStatus>> {
        Ok(self.child.try_wait()?)
    }

    /// Send a kill signal without waiting for the process to exit.
    pub fn start_kill(&mut self) -> Result<()> {
        Ok(self.child.start_kill()?)
    }

    /// Kill the process and wait for it to exit.
    pub async fn kill(&mut self) -> Result<()> {
        Ok(self.child.kill().await?)
    }

    /// Give up the wrapper and return the underlying Tokio child.
    pub fn into_child(self) -> Child {
        self.child
    }
}
