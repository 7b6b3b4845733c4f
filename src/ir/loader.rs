#![forbid(unsafe_code)]

//! Decoding of JSON IR documents
//!
//! Accepted shapes:
//! - a top-level array of rule objects
//! - an object with a `rules` array (other top-level keys such as `version`
//!   are ignored)
//!
//! Field values may be a single string or an array of strings. Anything else
//! cannot be held by the IR and is escalated as an input capability gap.

use crate::diagnostics::Diagnostics;
use crate::error::{ConvertError, IrError};
use crate::ir::{RuleIr, RuleItem};
use crate::policy::CapabilityPolicy;
use crate::types::RuleType;
use serde_json::{Map, Value};
use std::io::Read;

const TYPE_KEY: &str = "type";
const RULES_KEY: &str = "rules";

/// Decode an IR document from a string
///
/// # Errors
///
/// Returns `IrError` if the document is not JSON or does not have the expected
/// shape, and `CapabilityError` if a field cannot be represented and the
/// policy is pedantic.
pub fn from_json_str(
    input: &str,
    policy: &CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<RuleIr, ConvertError> {
    let value: Value = serde_json::from_str(input).map_err(IrError::from)?;
    from_value(value, policy, diagnostics)
}

/// Decode an IR document from a reader
///
/// # Errors
///
/// Same as [`from_json_str`].
pub fn from_json_reader<R: Read>(
    reader: R,
    policy: &CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<RuleIr, ConvertError> {
    let value: Value = serde_json::from_reader(reader).map_err(IrError::from)?;
    from_value(value, policy, diagnostics)
}

/// Decode an already parsed JSON value
///
/// # Errors
///
/// Same as [`from_json_str`].
pub fn from_value(
    value: Value,
    policy: &CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<RuleIr, ConvertError> {
    let rules = rules_array(value)?;
    let mut ir = RuleIr::new();
    for (index, rule) in rules.into_iter().enumerate() {
        ir.push(decode_item(index + 1, rule, policy, diagnostics)?);
    }
    tracing::debug!(items = ir.len(), "decoded IR document");
    Ok(ir)
}

fn rules_array(value: Value) -> Result<Vec<Value>, IrError> {
    match value {
        Value::Array(rules) => Ok(rules),
        Value::Object(mut document) => match document.remove(RULES_KEY) {
            Some(Value::Array(rules)) => Ok(rules),
            Some(_) => Err(IrError::Malformed("`rules` must be an array".to_string())),
            None => Err(IrError::Malformed(
                "expected an array of rules or an object with a `rules` array".to_string(),
            )),
        },
        _ => Err(IrError::Malformed(
            "expected an array of rules or an object with a `rules` array".to_string(),
        )),
    }
}

fn decode_item(
    number: usize,
    value: Value,
    policy: &CapabilityPolicy,
    diagnostics: &dyn Diagnostics,
) -> Result<RuleItem, ConvertError> {
    let Value::Object(object) = value else {
        return Err(IrError::Malformed(format!("rule {number} is not an object")).into());
    };

    let rule_type = decode_type(number, &object)?;
    let is_logical = rule_type == RuleType::Logical;
    let mut item = RuleItem::with_type(rule_type);

    for (key, value) in object {
        if key == TYPE_KEY {
            continue;
        }
        match string_values(&value) {
            Some(values) => {
                item.insert(key, values);
            }
            // nested sub-rules; the whole item is rejected on export
            None if is_logical => {}
            None => policy.incapable_input(
                format!("rule {number}: field `{key}` holds a non-string value and is dropped"),
                diagnostics,
            )?,
        }
    }
    Ok(item)
}

fn decode_type(number: usize, object: &Map<String, Value>) -> Result<RuleType, IrError> {
    match object.get(TYPE_KEY) {
        None | Some(Value::Null) => Ok(RuleType::Plain),
        Some(Value::String(tag)) => Ok(RuleType::from_tag(Some(tag.as_str()))),
        Some(_) => Err(IrError::Malformed(format!(
            "rule {number}: `type` must be a string"
        ))),
    }
}

fn string_values(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(single) => Some(vec![single.clone()]),
        Value::Array(values) => values
            .iter()
            .map(|value| value.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}
