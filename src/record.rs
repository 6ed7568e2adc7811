//! The output of one extraction call.

use std::collections::BTreeMap;

use serde::Serialize;

/// One data row of a multi-column table: normalized header → cell text.
pub type Row = BTreeMap<String, String>;

/// Flat normalized-field-name → value mapping (tax info, mill levy).
pub type FieldMap = BTreeMap<String, String>;

/// A value stored under one record key.
///
/// Serializes untagged, so JSON output is a plain string, an array of
/// objects, or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Scalar fields, addresses, and single-column lists joined with `", "`.
    Text(String),
    /// One mapping per data row, in row order.
    Rows(Vec<Row>),
    /// Key/value tables collapsed into one mapping.
    Fields(FieldMap),
}

impl From<String> for RecordValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Row>> for RecordValue {
    fn from(rows: Vec<Row>) -> Self {
        Self::Rows(rows)
    }
}

impl From<FieldMap> for RecordValue {
    fn from(fields: FieldMap) -> Self {
        Self::Fields(fields)
    }
}

/// Everything extracted from one property (or property-year) page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, RecordValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing whatever an earlier table put under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RecordValue>) {
        let key = key.into();
        if self.values.insert(key.clone(), value.into()).is_some() {
            tracing::debug!(key = %key, "record key overwritten by later table");
        }
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            RecordValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn rows(&self, key: &str) -> Option<&[Row]> {
        match self.values.get(key)? {
            RecordValue::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn fields(&self, key: &str) -> Option<&FieldMap> {
        match self.values.get(key)? {
            RecordValue::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pretty-printed JSON. Keys are sorted, so equal records serialize to
    /// identical bytes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
