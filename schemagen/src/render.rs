// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! GraphQL text rendering
//!
//! [`render_value`] turns a generated value into argument text: JSON layout
//! with two-space indentation, but with unquoted keys and bare enum literals.
//! [`render_selection`] builds a depth-bounded selection set for an object type.

use crate::error::Result;
use crate::generator::GeneratedValue;
use crate::schema::{NamedType, ObjectKind, ObjectType, TypeSchema};

const INDENT: &str = "  ";

/// Render a value as GraphQL argument text
pub fn render_value(value: &GeneratedValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &GeneratedValue, level: usize) {
    match value {
        GeneratedValue::String(s) => out.push_str(&serde_json::Value::String(s.clone()).to_string()),
        GeneratedValue::Int(i) => out.push_str(&i.to_string()),
        GeneratedValue::Float(f) if f.is_finite() => out.push_str(&f.to_string()),
        GeneratedValue::Float(_) => out.push_str("null"),
        GeneratedValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        GeneratedValue::Enum(literal) => out.push_str(literal),
        GeneratedValue::Object(entries) if entries.is_empty() => out.push_str("{}"),
        GeneratedValue::Object(entries) => {
            out.push_str("{\n");
            for (i, (key, entry)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(out, level + 1);
                out.push_str(key);
                out.push_str(": ");
                write_value(out, entry, level + 1);
            }
            out.push('\n');
            push_indent(out, level);
            out.push('}');
        }
        GeneratedValue::List(items) if items.is_empty() => out.push_str("[]"),
        GeneratedValue::List(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(out, level + 1);
                write_value(out, item, level + 1);
            }
            out.push('\n');
            push_indent(out, level);
            out.push(']');
        }
    }
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

/// Render `{ f1 f2 g { ... } }` for every field of `object`
///
/// Object and interface fields recurse while `depth < depth_limit`; at the
/// limit only the field name is emitted. Union fields below the limit select
/// `__typename`.
pub fn render_selection(
    schema: &TypeSchema,
    object: &ObjectType,
    depth: usize,
    depth_limit: usize,
) -> Result<String> {
    let mut parts = Vec::with_capacity(object.fields.len());
    for field in object.fields.values() {
        let named_type = schema.named_type_of(&field.ty)?;
        match named_type {
            NamedType::Object(nested) if nested.kind == ObjectKind::Union => {
                if depth < depth_limit {
                    parts.push(format!("{} {{ __typename }}", field.name));
                } else {
                    parts.push(field.name.clone());
                }
            }
            NamedType::Object(nested) if named_type.is_composite() && depth < depth_limit => {
                let nested_selection = render_selection(schema, nested, depth + 1, depth_limit)?;
                parts.push(format!("{} {}", field.name, nested_selection));
            }
            _ => parts.push(field.name.clone()),
        }
    }
    if parts.is_empty() {
        return Ok("{ }".to_string());
    }
    Ok(format!("{{ {} }}", parts.join(" ")))
}
