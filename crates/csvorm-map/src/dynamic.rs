//! Records whose shape comes from a runtime schema.

use std::collections::BTreeMap;

use csvorm_model::{FieldBinding, Value};

use crate::error::Result;
use crate::record::Record;

/// A record stored as a field-to-value map.
///
/// Pairs with a [`csvorm_model::RecordType`] loaded at runtime. Fields
/// that were never assigned read back as [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRecord {
    values: BTreeMap<String, Value>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.set(field, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl Record for DynamicRecord {
    fn assign(&mut self, binding: &FieldBinding, value: Value) -> Result<()> {
        self.set(binding.field.clone(), value);
        Ok(())
    }

    fn value_of(&self, binding: &FieldBinding) -> Result<Value> {
        Ok(self.get(&binding.field).cloned().unwrap_or(Value::Null))
    }
}
