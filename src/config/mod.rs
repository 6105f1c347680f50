// src/config/mod.rs

//! Configuration loading and validation for the harness.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate it and merge in the CLI executable (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_optional};
pub use model::{
    DEFAULT_INVOCATION, HarnessConfig, HarnessSection, InvocationConfig, RawConfigFile,
};
