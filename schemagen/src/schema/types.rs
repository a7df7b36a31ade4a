// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Type definitions for the schema model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named scalar type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarType {
    pub name: String,
}

/// Named enum type with its values in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

/// Flavour of an object-like type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// `type X { ... }`
    Output,
    /// `input X { ... }`
    Input,
    /// `interface X { ... }`
    Interface,
    /// `union X = A | B`
    Union,
}

impl ObjectKind {
    /// SDL keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            ObjectKind::Output => "type",
            ObjectKind::Input => "input",
            ObjectKind::Interface => "interface",
            ObjectKind::Union => "union",
        }
    }
}

/// Object, input object, interface or union type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub kind: ObjectKind,
    /// Fields in declaration order
    pub fields: IndexMap<String, FieldDefinition>,
    /// Interfaces this type implements
    #[serde(default)]
    pub implements: Vec<String>,
    /// Member types of a union
    #[serde(default)]
    pub members: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: IndexMap::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Builder-style field addition
    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.add_field(FieldDefinition::new(name, ty));
        self
    }

    /// Add or replace a field, keeping the position of a replaced field
    pub fn add_field(&mut self, field: FieldDefinition) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn is_input(&self) -> bool {
        self.kind == ObjectKind::Input
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ObjectKind::Interface
    }

    /// Interface or union: creation picks one of its concrete types
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, ObjectKind::Interface | ObjectKind::Union)
    }
}

/// A field of an object-like type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: FieldType,
    /// Arguments in declaration order (output types only)
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// Field argument or input field with an optional default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValueDefinition {
    pub name: String,
    pub ty: FieldType,
    /// Default value as literal SDL text
    #[serde(default)]
    pub default_value: Option<String>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }
}

/// Reference to a named type plus its wrapping modifiers
///
/// `nullable` applies to the outermost type: for a list field that is the
/// list itself, and `item_nullable` applies to its elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldType {
    pub name: String,
    pub nullable: bool,
    pub is_list: bool,
    pub item_nullable: bool,
}

impl FieldType {
    /// Nullable, non-list reference
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
            is_list: false,
            item_nullable: true,
        }
    }

    /// Nullable list of nullable items
    pub fn list_of(name: impl Into<String>) -> Self {
        Self {
            is_list: true,
            ..Self::named(name)
        }
    }

    /// Mark the outermost type non-null
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark list items non-null
    pub fn required_items(mut self) -> Self {
        self.item_nullable = false;
        self
    }

    /// Same wrapper structure around another named type
    pub fn rewrap(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Same type with the outermost non-null marker removed
    pub fn to_nullable(&self) -> Self {
        Self {
            nullable: true,
            ..self.clone()
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list {
            write!(f, "[{}", self.name)?;
            if !self.item_nullable {
                write!(f, "!")?;
            }
            write!(f, "]")?;
        } else {
            write!(f, "{}", self.name)?;
        }
        if !self.nullable {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// A schema type with identity by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NamedType {
    Scalar(ScalarType),
    Enum(EnumType),
    Object(ObjectType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(scalar) => &scalar.name,
            NamedType::Enum(enum_type) => &enum_type.name,
            NamedType::Object(object) => &object.name,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            NamedType::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            NamedType::Enum(enum_type) => Some(enum_type),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NamedType::Scalar(_) | NamedType::Enum(_))
    }

    /// Output object or interface: something a selection descends into
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            NamedType::Object(ObjectType {
                kind: ObjectKind::Output | ObjectKind::Interface,
                ..
            })
        )
    }
}
