// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::command::{CommandSpec, Flag};

/// Name of the invocation used when a config defines none: launch the
/// executable with no flags and no arguments.
pub const DEFAULT_INVOCATION: &str = "noargs";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [harness]
/// executable = "build/fdb"
///
/// [invocation.noargs]
///
/// [invocation.mismatch]
/// flags = [{ name = "m", value = "1" }, { name = "z" }]
/// args = ["barcodes.txt", "r1.fastq"]
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub harness: HarnessSection,

    /// Named invocations from `[invocation.<name>]`.
    #[serde(default)]
    pub invocation: BTreeMap<String, InvocationConfig>,
}

/// `[harness]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessSection {
    /// Path to the executable under test. The CLI positional argument wins
    /// over this when both are given.
    #[serde(default)]
    pub executable: Option<String>,
}

/// One `[invocation.<name>]` table: flags (in order) and positional args.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvocationConfig {
    #[serde(default)]
    pub flags: Vec<Flag>,

    #[serde(default)]
    pub args: Vec<String>,
}

impl InvocationConfig {
    pub fn to_command(&self, executable: &str) -> CommandSpec {
        CommandSpec::new(executable)
            .with_flags(self.flags.iter().cloned())
            .args(self.args.iter().cloned())
    }
}

/// Validated harness configuration.
///
/// This is the explicit value the harness passes around in place of any
/// global "path to the executable" state. Construct it with
/// [`HarnessConfig::resolve`] or `HarnessConfig::try_from(raw)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    executable: String,
    invocations: BTreeMap<String, InvocationConfig>,
}

impl HarnessConfig {
    pub(crate) fn new_unchecked(
        executable: String,
        invocations: BTreeMap<String, InvocationConfig>,
    ) -> Self {
        Self {
            executable,
            invocations,
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn invocations(&self) -> &BTreeMap<String, InvocationConfig> {
        &self.invocations
    }

    pub fn invocation_names(&self) -> impl Iterator<Item = &str> {
        self.invocations.keys().map(String::as_str)
    }

    /// The command for a single named invocation.
    pub fn command_for(&self, name: &str) -> Option<CommandSpec> {
        self.invocations
            .get(name)
            .map(|inv| inv.to_command(&self.executable))
    }

    /// All invocations as `(name, command)` pairs, ordered by name.
    pub fn commands(&self) -> impl Iterator<Item = (&str, CommandSpec)> {
        self.invocations
            .iter()
            .map(|(name, inv)| (name.as_str(), inv.to_command(&self.executable)))
    }
}
