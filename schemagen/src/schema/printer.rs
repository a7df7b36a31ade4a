// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// SDL printer for TypeSchema

use std::fmt;

use super::types::{FieldDefinition, InputValueDefinition, NamedType, ObjectKind, ObjectType};
use super::{TypeSchema, BUILTIN_SCALARS};

impl fmt::Display for TypeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for named_type in self.iter() {
            if BUILTIN_SCALARS.contains(&named_type.name()) {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write_type(f, named_type)?;
        }
        Ok(())
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, named_type: &NamedType) -> fmt::Result {
    match named_type {
        NamedType::Scalar(scalar) => writeln!(f, "scalar {}", scalar.name),
        NamedType::Enum(enum_type) => {
            writeln!(f, "enum {} {{", enum_type.name)?;
            for value in &enum_type.values {
                writeln!(f, "  {}", value)?;
            }
            writeln!(f, "}}")
        }
        NamedType::Object(object) if object.kind == ObjectKind::Union => {
            writeln!(f, "union {} = {}", object.name, object.members.join(" | "))
        }
        NamedType::Object(object) => write_object(f, object),
    }
}

fn write_object(f: &mut fmt::Formatter<'_>, object: &ObjectType) -> fmt::Result {
    write!(f, "{} {}", object.kind.keyword(), object.name)?;
    if !object.implements.is_empty() {
        write!(f, " implements {}", object.implements.join(" & "))?;
    }
    if object.fields.is_empty() {
        return writeln!(f);
    }
    writeln!(f, " {{")?;
    for field in object.fields.values() {
        write_field(f, field)?;
    }
    writeln!(f, "}}")
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &FieldDefinition) -> fmt::Result {
    write!(f, "  {}", field.name)?;
    if !field.arguments.is_empty() {
        let arguments: Vec<String> = field.arguments.iter().map(argument_text).collect();
        write!(f, "({})", arguments.join(", "))?;
    }
    writeln!(f, ": {}", field.ty)
}

fn argument_text(argument: &InputValueDefinition) -> String {
    match &argument.default_value {
        Some(default) => format!("{}: {} = {}", argument.name, argument.ty, default),
        None => format!("{}: {}", argument.name, argument.ty),
    }
}
