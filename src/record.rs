//! Account records and the field extractor.

use crate::error::{EngineError, Result};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single entity's field-name-to-value mapping.
///
/// Records carry no identity of their own; the store attaches the account
/// number as the `account_number` field when it hands out a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets `field`, returning the previous value if any.
    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(field.to_string(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Looks up the comparison key `field` on `record`.
///
/// Fails with [`EngineError::FieldNotFound`]; no default is substituted.
pub fn extract<'a>(record: &'a Record, field: &str) -> Result<&'a FieldValue> {
    record.get(field).ok_or_else(|| EngineError::FieldNotFound {
        field: field.to_string(),
    })
}
