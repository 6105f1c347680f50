// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{DEFAULT_INVOCATION, HarnessConfig, InvocationConfig, RawConfigFile};
use crate::errors::{HarnessError, Result};

impl TryFrom<RawConfigFile> for HarnessConfig {
    type Error = HarnessError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let executable = resolve_executable(&raw)?;
        let mut invocations = raw.invocation;
        if invocations.is_empty() {
            invocations.insert(DEFAULT_INVOCATION.to_string(), InvocationConfig::default());
        }

        validate_invocations(&executable, &invocations)?;
        Ok(HarnessConfig::new_unchecked(executable, invocations))
    }
}

impl HarnessConfig {
    /// Merge the CLI executable over an optional config file and validate.
    ///
    /// The CLI value wins when both are present.
    pub fn resolve(cli_executable: Option<String>, file: Option<RawConfigFile>) -> Result<Self> {
        let mut raw = file.unwrap_or_default();
        if let Some(exe) = cli_executable {
            raw.harness.executable = Some(exe);
        }
        HarnessConfig::try_from(raw)
    }
}

fn resolve_executable(cfg: &RawConfigFile) -> Result<String> {
    match cfg.harness.executable.as_deref().map(str::trim) {
        Some(exe) if !exe.is_empty() => Ok(exe.to_string()),
        _ => Err(HarnessError::ConfigError(
            "no executable given: pass it on the command line or set [harness].executable"
                .to_string(),
        )),
    }
}

// Flag names and values are otherwise passed through untouched.
fn validate_invocations(
    executable: &str,
    invocations: &BTreeMap<String, InvocationConfig>,
) -> Result<()> {
    for (name, inv) in invocations.iter() {
        for flag in inv.flags.iter() {
            if flag.name.trim().is_empty() {
                return Err(HarnessError::ConfigError(format!(
                    "invocation '{}' has a flag with an empty name",
                    name
                )));
            }
        }

        inv.to_command(executable).argv()?;
    }
    Ok(())
}
