// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Entity flattening
//!
//! Turns a nested create input into the shape a read of the created object
//! returns: `{connect: x}` becomes `{id: x}`, `{createY: {...}}` becomes the
//! flattened payload, and edge annotations are dropped.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::generator::GeneratedValue;

/// Expected entity shape for a generated input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entity(GeneratedValue);

impl Entity {
    pub fn value(&self) -> &GeneratedValue {
        &self.0
    }

    pub fn into_inner(self) -> GeneratedValue {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&GeneratedValue> {
        self.0.get(key)
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.0.to_json()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Flatten `input` using the field names of `config`
pub fn flatten(input: &GeneratedValue, config: &GeneratorConfig) -> Entity {
    Entity(flatten_value(input, config))
}

/// Flatten with the default `connect`/`create`/`annotations` names
pub fn flatten_default(input: &GeneratedValue) -> Entity {
    flatten(input, &GeneratorConfig::default())
}

fn flatten_value(value: &GeneratedValue, config: &GeneratorConfig) -> GeneratedValue {
    match value {
        GeneratedValue::Object(entries) => match wrapped(entries, config) {
            Some(Wrapped::Connect(id)) => GeneratedValue::object_from([("id", id.clone())]),
            Some(Wrapped::Create(payload)) => flatten_value(payload, config),
            None => GeneratedValue::Object(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), flatten_value(entry, config)))
                    .collect(),
            ),
        },
        GeneratedValue::List(items) => {
            GeneratedValue::List(items.iter().map(|item| flatten_value(item, config)).collect())
        }
        other => other.clone(),
    }
}

enum Wrapped<'a> {
    Connect(&'a GeneratedValue),
    Create(&'a GeneratedValue),
}

/// A relation wrapper has exactly one key besides annotations
fn wrapped<'a>(entries: &'a IndexMap<String, GeneratedValue>, config: &GeneratorConfig) -> Option<Wrapped<'a>> {
    let mut keys = entries
        .iter()
        .filter(|(key, _)| **key != config.annotations_field);
    let (key, value) = keys.next()?;
    if keys.next().is_some() {
        return None;
    }

    if *key == config.connect_field && !value.is_object() {
        Some(Wrapped::Connect(value))
    } else if config.is_create_strategy(key) && value.is_object() {
        Some(Wrapped::Create(value))
    } else {
        None
    }
}
