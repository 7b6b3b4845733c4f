#![forbid(unsafe_code)]

//! Rule intermediate representation
//!
//! The IR is the dialect-neutral rule structure consumed by exporters: an
//! ordered sequence of rule items, each mapping field keys to raw values.

pub mod loader;
mod rule_item;

pub use loader::{from_json_reader, from_json_str};
pub use rule_item::{Field, RuleIr, RuleItem};
