// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Generated value tree

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A synthesized input value
///
/// Enum literals are kept apart from strings so the renderer can emit them
/// bare. Objects keep field insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Enum(String),
    Object(IndexMap<String, GeneratedValue>),
    List(Vec<GeneratedValue>),
}

impl GeneratedValue {
    /// Empty object value
    pub fn object() -> Self {
        GeneratedValue::Object(IndexMap::new())
    }

    /// Object from `(key, value)` pairs in order
    pub fn object_from<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, GeneratedValue)>,
    {
        GeneratedValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn string(value: impl Into<String>) -> Self {
        GeneratedValue::String(value.into())
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, GeneratedValue>> {
        match self {
            GeneratedValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[GeneratedValue]> {
        match self {
            GeneratedValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// String payload of a string or enum value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::String(s) | GeneratedValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Entry of an object value
    pub fn get(&self, key: &str) -> Option<&GeneratedValue> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, GeneratedValue::Enum(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, GeneratedValue::Object(_))
    }

    /// Convert to a JSON value; enum literals become JSON strings
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }
}

impl From<&GeneratedValue> for serde_json::Value {
    fn from(value: &GeneratedValue) -> Self {
        match value {
            GeneratedValue::String(s) | GeneratedValue::Enum(s) => serde_json::Value::String(s.clone()),
            GeneratedValue::Int(i) => serde_json::Value::from(*i),
            GeneratedValue::Float(f) => serde_json::Value::from(*f),
            GeneratedValue::Boolean(b) => serde_json::Value::Bool(*b),
            GeneratedValue::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            GeneratedValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeneratedValue::String(s) | GeneratedValue::Enum(s) => serializer.serialize_str(s),
            GeneratedValue::Int(i) => serializer.serialize_i64(*i),
            GeneratedValue::Float(f) => serializer.serialize_f64(*f),
            GeneratedValue::Boolean(b) => serializer.serialize_bool(*b),
            GeneratedValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            GeneratedValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_value(self))
    }
}
