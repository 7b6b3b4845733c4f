//! Test utilities for ruleconv integration tests

#![allow(dead_code)]

use ruleconv::{
    CapabilityPolicy, ConvertError, Exporter, MemoryDiagnostics, MetaDomainExporter, OutputFormat,
    RuleIr, RuleItem,
};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Owned strings from literals
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Plain rule item built from `(key, values)` pairs, in order
pub fn plain(fields: Vec<(&str, Vec<&str>)>) -> RuleItem {
    fields
        .into_iter()
        .fold(RuleItem::new(), |item, (key, values)| item.with_field(key, values))
}

/// Export `ir` into a string
pub fn render(
    ir: RuleIr,
    format: OutputFormat,
    policy: CapabilityPolicy,
    diagnostics: &MemoryDiagnostics,
) -> Result<String, ConvertError> {
    let exporter = MetaDomainExporter::new(ir, format, policy, diagnostics)?;
    let mut buffer = Vec::new();
    exporter.export(&mut buffer)?;
    Ok(String::from_utf8(buffer).expect("exporter output is UTF-8"))
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
