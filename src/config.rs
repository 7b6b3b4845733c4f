//! Configuration file parsing and validation

pub mod ruleconv_toml;

pub use ruleconv_toml::{Config, OutputConfig, PolicyConfig, RuleconvMeta};
