// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually starting the executable under
//! test, using `tokio::process::Command`, and handing its pipes back to the
//! caller without waiting on it.
//!
//! - [`runner`] owns [`ProcessRunner`], which assembles, logs and splits the
//!   command line before launching it.
//! - [`backend`] provides the `Launcher` trait and the concrete
//!   `TokioLauncher` used in production, which tests can replace with a
//!   recording implementation.
//! - [`handle`] wraps the spawned child and its stdout/stderr pipes.

pub mod backend;
pub mod handle;
pub mod runner;

pub use backend::{Launcher, TokioLauncher};
pub use handle::ProcessHandle;
pub use runner::{ProcessRunner, spawn};
