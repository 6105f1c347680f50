// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{HarnessConfig, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it on its own.
///
/// The file must name `[harness].executable`, since there is no CLI value
/// to fall back on here. The binary goes through [`HarnessConfig::resolve`]
/// instead.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<HarnessConfig> {
    let raw_config = load_from_path(&path)?;
    let config = HarnessConfig::try_from(raw_config)?;
    Ok(config)
}

/// Load the config the harness should use, if any.
///
/// - An explicit path must exist and parse.
/// - Without one, [`default_config_path`] is used when that file exists.
/// - Otherwise there is no config file and `Ok(None)` is returned.
pub fn load_optional(explicit: Option<&Path>) -> Result<Option<RawConfigFile>> {
    if let Some(path) = explicit {
        return load_from_path(path).map(Some);
    }

    let default = default_config_path();
    if default.is_file() {
        debug!(path = ?default, "using default harness config");
        return load_from_path(&default).map(Some);
    }

    Ok(None)
}

/// Default config location: `FdbHarness.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("FdbHarness.toml")
}
