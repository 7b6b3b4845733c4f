#![forbid(unsafe_code)]

//! Meta-domain rule set exporter
//!
//! Translates plain rule items into the domain rule-provider syntax:
//! - `domain` values are exact matches and pass through unchanged
//! - `domain_suffix` values match the domain and all its subdomains and are
//!   written with the `+.` wildcard marker, unless they already start with
//!   `.` (subdomains only), which the target syntax expresses verbatim
//!
//! Every other field resolves through the registry fallback to an
//! unsupported-field handler, which escalates through the capability policy.
//! Values holding a line break cannot be written as a single rule line and
//! escalate the same way.

use crate::diagnostics::Diagnostics;
use crate::error::{ConvertError, IrError, RegistryError};
use crate::export::Exporter;
use crate::ir::{Field, RuleIr, RuleItem};
use crate::output;
use crate::policy::CapabilityPolicy;
use crate::registry::{Fallback, KeyRegistry};
use crate::types::{OutputFormat, RuleType};
use std::io::Write;

/// Pure value-list transformation for one field kind
pub type Translator = fn(&[String]) -> Vec<String>;

/// What the exporter does with a field
#[derive(Debug, Clone)]
pub enum FieldHandler {
    /// Translate the values
    Translate(Translator),
    /// The named field has no meta-domain counterpart
    Unsupported(String),
}

/// Wildcard marker matching a domain and all of its subdomains
const WILDCARD_SUFFIX: &str = "+.";

const FIELD_TRANSLATORS: [(&str, Translator); 2] = [
    ("domain", translate_domain as Translator),
    ("domain_suffix", translate_domain_suffix as Translator),
];

/// `domain`: identity
pub fn translate_domain(values: &[String]) -> Vec<String> {
    values.to_vec()
}

/// `domain_suffix`: prefix general suffixes with `+.`, keep anchored ones
pub fn translate_domain_suffix(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            if value.starts_with('.') {
                value.clone()
            } else {
                format!("{WILDCARD_SUFFIX}{value}")
            }
        })
        .collect()
}

/// Build the meta-domain field registry
///
/// # Errors
///
/// Returns `RegistryError::DuplicateKey` if the translator table binds a key
/// twice.
pub fn field_registry() -> Result<KeyRegistry<FieldHandler>, RegistryError> {
    KeyRegistry::from_entries(
        FIELD_TRANSLATORS
            .iter()
            .map(|&(key, translate)| (key, FieldHandler::Translate(translate))),
        Fallback::factory(|key: &str| FieldHandler::Unsupported(key.to_string())),
    )
}

/// Exporter for meta-domain rule sets
pub struct MetaDomainExporter<'d> {
    ir: RuleIr,
    format: OutputFormat,
    policy: CapabilityPolicy,
    diagnostics: &'d dyn Diagnostics,
    registry: KeyRegistry<FieldHandler>,
}

impl<'d> MetaDomainExporter<'d> {
    /// Creates an exporter for `ir`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the field registry cannot be built.
    pub fn new(
        ir: RuleIr,
        format: OutputFormat,
        policy: CapabilityPolicy,
        diagnostics: &'d dyn Diagnostics,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            ir,
            format,
            policy,
            diagnostics,
            registry: field_registry()?,
        })
    }

    /// Translate the whole IR into rule lines
    ///
    /// Lines follow IR order, then field order within each item. Nothing is
    /// sorted or deduplicated.
    ///
    /// # Errors
    ///
    /// Fails on the first item that [`Self::export_item`] rejects.
    pub fn lines(&self) -> Result<Vec<String>, ConvertError> {
        let mut lines = Vec::new();
        for item in &self.ir {
            lines.extend(self.export_item(item)?);
        }
        tracing::debug!(
            items = self.ir.len(),
            lines = lines.len(),
            "translated meta-domain rule set"
        );
        Ok(lines)
    }

    /// Translate one rule item into rule lines
    ///
    /// # Errors
    ///
    /// - `IrError::UnexpectedType` for an unknown type tag
    /// - a structural `CapabilityError` for logical rules, in every policy mode
    /// - a degradable `CapabilityError` for unsupported fields under a pedantic
    ///   policy
    pub fn export_item(&self, item: &RuleItem) -> Result<Vec<String>, ConvertError> {
        match item.rule_type() {
            RuleType::Plain => {
                let item = item.minify();
                let mut lines = Vec::new();
                for field in item.fields() {
                    self.translate_field(field, &mut lines)?;
                }
                Ok(lines)
            }
            RuleType::Logical => {
                Err(CapabilityPolicy::structural_output("logical rule is not supported").into())
            }
            RuleType::Unknown(tag) => Err(IrError::UnexpectedType(tag.clone()).into()),
        }
    }

    fn translate_field(&self, field: &Field, lines: &mut Vec<String>) -> Result<(), ConvertError> {
        match self.registry.lookup(field.key())?.as_ref() {
            FieldHandler::Translate(translate) => {
                for value in translate(field.values()) {
                    if value.contains(['\n', '\r']) {
                        self.policy.incapable_output(
                            format!("field `{}` value contains a line break", field.key()),
                            self.diagnostics,
                        )?;
                        continue;
                    }
                    lines.push(value);
                }
            }
            FieldHandler::Unsupported(key) => self.policy.incapable_output(
                format!("field `{key}` is not supported by meta-domain rule sets"),
                self.diagnostics,
            )?,
        }
        Ok(())
    }
}

impl Exporter for MetaDomainExporter<'_> {
    fn export(&self, writer: &mut dyn Write) -> Result<(), ConvertError> {
        let lines = self.lines()?;
        output::sink_for(self.format).write_lines(&lines, writer)
    }
}
