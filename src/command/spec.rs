// src/command/spec.rs

use std::fmt;

use serde::Deserialize;

use crate::command::tokenize::tokenize;
use crate::errors::Result;

/// A single-dash command-line option.
///
/// `value = None` is a switch such as fdb's `-v` or `-z`; it renders as the
/// bare `-<name>` token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flag {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Flag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn switch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "-{} {}", self.name, value),
            None => write!(f, "-{}", self.name),
        }
    }
}

/// Everything needed to launch one process: the executable, its flags and
/// its positional arguments.
///
/// Flags and arguments keep insertion order. When rendered, every flag
/// precedes every positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub executable: String,
    pub flags: Vec<Flag>,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            flags: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Append `-<name> <value>`.
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.push(Flag::new(name, value));
        self
    }

    /// Append a bare `-<name>`.
    pub fn switch(mut self, name: impl Into<String>) -> Self {
        self.flags.push(Flag::switch(name));
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = Flag>) -> Self {
        self.flags.extend(flags);
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render the command as one space-joined line:
    /// executable, then each flag, then each positional argument verbatim.
    ///
    /// Values are not quoted; a value containing spaces or quotes is split
    /// by [`CommandSpec::argv`] exactly as a shell would split it.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.flags.len() + self.args.len());
        parts.push(self.executable.clone());
        parts.extend(self.flags.iter().map(Flag::to_string));
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Assemble and tokenize the command line into argv.
    pub fn argv(&self) -> Result<Vec<String>> {
        tokenize(&self.command_line())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
