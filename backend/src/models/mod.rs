//! Domain models for the conversion pipeline.
//!
//! - [`CellValue`] - a typed spreadsheet cell
//! - [`Record`] - one sales line, an ordered mapping from column name to value

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

// =============================================================================
// Cell Value
// =============================================================================

/// A single cell as read from the worksheet.
///
/// Temporal variants have no JSON form of their own: serializing one fails
/// until the temporal normalization step has replaced it with a string.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Calendar date with time of day (midnight for date-only cells).
    DateTime(NaiveDateTime),
    /// Time of day without a date.
    Time(NaiveTime),
    /// Elapsed time, from `[h]:mm:ss` style formats.
    Duration(Duration),
}

impl CellValue {
    /// `true` for the date/time-like variants.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            CellValue::DateTime(_) | CellValue::Time(_) | CellValue::Duration(_)
        )
    }

    /// Type name used in "not JSON serializable" messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "str",
            CellValue::DateTime(_) => "datetime",
            CellValue::Time(_) => "time",
            CellValue::Duration(_) => "timedelta",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            // NaN and infinities have no JSON literal
            CellValue::Float(f) if !f.is_finite() => serializer.serialize_unit(),
            CellValue::Float(f) => serializer.serialize_f64(*f),
            CellValue::String(s) => serializer.serialize_str(s),
            temporal => Err(S::Error::custom(format!(
                "Object of type {} is not JSON serializable",
                temporal.type_name()
            ))),
        }
    }
}

#[cfg(test)]
impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One row of the sheet, keyed by (renamed) column name.
///
/// Keys keep insertion order. Inserting a key that is already present
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) -> Option<CellValue> {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut CellValue> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
