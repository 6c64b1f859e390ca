// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute records attached to the shapes of a layer.
//!
//! Record `i` of an [`AttributeTable`] describes shape `i`. Fields are looked
//! up by name at runtime through [`AttributeSource`], since the set of fields
//! a caller classifies by is not known until the call is made.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Value {
    /// Exact comparison of two attribute values.
    ///
    /// Numbers compare by numeric value regardless of `Int`/`Double`. `NaN`
    /// never equals anything, itself included.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Double(b)) | (Value::Double(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            _ => self == other,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Read access to a record's fields by name.
pub trait AttributeSource {
    fn get(&self, field: &str) -> Option<&Value>;

    fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

/// One attribute record. Fields serialize in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`Record::insert`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl AttributeSource for Record {
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered records, one per shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable {
    records: Vec<Record>,
}

impl AttributeTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Field names of the table schema, taken from the first record.
    pub fn field_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.field_names().collect())
            .unwrap_or_default()
    }

    /// Returns `true` if the schema has the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.records.first().is_some_and(|r| r.contains(field))
    }
}
