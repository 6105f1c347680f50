use fdb_harness::command::Flag;
use fdb_harness::config::{HarnessConfig, InvocationConfig, RawConfigFile};

/// Builder for `HarnessConfig` to simplify test setup.
pub struct HarnessConfigBuilder {
    config: RawConfigFile,
}

impl HarnessConfigBuilder {
    pub fn new(executable: &str) -> Self {
        let mut config = RawConfigFile::default();
        config.harness.executable = Some(executable.to_string());
        Self { config }
    }

    pub fn with_invocation(mut self, name: &str, invocation: InvocationConfig) -> Self {
        self.config.invocation.insert(name.to_string(), invocation);
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> HarnessConfig {
        HarnessConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

/// Builder for `InvocationConfig`.
#[derive(Default)]
pub struct InvocationBuilder {
    invocation: InvocationConfig,
}

impl InvocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: &str, value: &str) -> Self {
        self.invocation.flags.push(Flag::new(name, value));
        self
    }

    pub fn switch(mut self, name: &str) -> Self {
        self.invocation.flags.push(Flag::switch(name));
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.invocation.args.push(arg.to_string());
        self
    }

    pub fn build(self) -> InvocationConfig {
        self.invocation
    }
}
