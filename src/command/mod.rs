// src/command/mod.rs

//! Command-line assembly.
//!
//! - [`spec`] holds [`CommandSpec`], the ordered executable / flags /
//!   positional arguments triple, and renders it into a single line.
//! - [`tokenize`] splits that line back into argv using POSIX shell rules.

pub mod spec;
pub mod tokenize;

pub use spec::{CommandSpec, Flag};
pub use tokenize::tokenize;
