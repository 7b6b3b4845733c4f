//! Parsing and validation for ruleconv.toml configuration files

use crate::error::ConfigError;
use crate::policy::CapabilityPolicy;
use crate::types::{ColorOption, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported configuration version
pub const CONFIG_VERSION: &str = "1";

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "ruleconv.toml";

/// Main configuration struct for ruleconv.toml
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metadata
    #[serde(default)]
    pub ruleconv: RuleconvMeta,

    /// Capability policy
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The capability policy this configuration selects
    pub fn capability_policy(&self) -> CapabilityPolicy {
        CapabilityPolicy::new(self.policy.pedantic)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ruleconv.version != CONFIG_VERSION {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '{}'",
                self.ruleconv.version, CONFIG_VERSION
            )));
        }
        Ok(())
    }
}

/// Metadata section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleconvMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for RuleconvMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

/// Policy section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Fail on every capability gap instead of warning
    #[serde(default)]
    pub pedantic: bool,
}

/// Output section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output framing
    #[serde(default)]
    pub format: OutputFormat,

    /// Color of diagnostics
    #[serde(default)]
    pub color: ColorOption,
}
