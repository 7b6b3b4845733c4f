#![forbid(unsafe_code)]

//! Rule item and rule set types

use crate::types::RuleType;

/// One field of a rule item: a key and its raw values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String,
    values: Vec<String>,
}

impl Field {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns true if the field carries no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single rule: field key to value list, plus a type tag
///
/// Fields keep their insertion order, which is the order exporters visit
/// them in. Keys are unique; inserting an existing key replaces its values
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleItem {
    rule_type: RuleType,
    fields: Vec<Field>,
}

impl RuleItem {
    /// Creates an empty plain rule item
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty rule item with the given type
    pub fn with_type(rule_type: RuleType) -> Self {
        Self {
            rule_type,
            fields: Vec::new(),
        }
    }

    /// Builder-style insert
    pub fn with_field<K, I, V>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.insert(key, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn rule_type(&self) -> &RuleType {
        &self.rule_type
    }

    /// Sets the values for `key`, returning the previous values if any
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        let key = key.into();
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(field) => Some(std::mem::replace(&mut field.values, values)),
            None => {
                self.fields.push(Field { key, values });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(Field::values)
    }

    /// Fields in insertion order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }

    /// Number of fields, empty ones included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy without the fields whose value list is empty
    ///
    /// Type tag and the order of the remaining fields are preserved.
    pub fn minify(&self) -> RuleItem {
        RuleItem {
            rule_type: self.rule_type.clone(),
            fields: self
                .fields
                .iter()
                .filter(|field| !field.is_empty())
                .cloned()
                .collect(),
        }
    }
}

/// An ordered rule set
///
/// Order is significant: target engines may apply first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleIr {
    items: Vec<RuleItem>,
}

impl RuleIr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: RuleItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[RuleItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<RuleItem>> for RuleIr {
    fn from(items: Vec<RuleItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<RuleItem> for RuleIr {
    fn from_iter<I: IntoIterator<Item = RuleItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleIr {
    type Item = &'a RuleItem;
    type IntoIter = std::slice::Iter<'a, RuleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for RuleIr {
    type Item = RuleItem;
    type IntoIter = std::vec::IntoIter<RuleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
