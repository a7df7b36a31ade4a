// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type schema model
//!
//! A read-only lookup surface over a parsed schema document: named types,
//! their fields, list/nullable wrapping, and the generated input and list
//! counterparts of object types. Generators borrow a [`TypeSchema`]
//! explicitly; there is no ambient registry.

pub mod extender;
pub mod naming;
pub mod parser;
pub mod printer;
pub mod types;

use indexmap::IndexMap;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};

pub use extender::extend_schema;
pub use parser::parse_schema;
pub use types::{
    EnumType, FieldDefinition, FieldType, InputValueDefinition, NamedType, ObjectKind, ObjectType,
    ScalarType,
};

/// Scalars every schema knows without declaring them
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Parsed schema: every named type, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSchema {
    types: IndexMap<String, NamedType>,
}

impl Default for TypeSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSchema {
    /// Schema holding only the built-in scalars
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALARS {
            types.insert(
                name.to_string(),
                NamedType::Scalar(ScalarType {
                    name: name.to_string(),
                }),
            );
        }
        Self { types }
    }

    /// Parse SDL text
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        parse_schema(sdl)
    }

    /// Read and parse an SDL file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading schema from {:?}", path);
        let sdl = std::fs::read_to_string(path)?;
        parse_schema(&sdl)
    }

    /// Add or replace a type, returning the replaced one
    pub fn insert(&mut self, named_type: NamedType) -> Option<NamedType> {
        self.types.insert(named_type.name().to_string(), named_type)
    }

    pub(crate) fn object_mut(&mut self, name: &str) -> Result<&mut ObjectType> {
        match self.types.get_mut(name) {
            Some(NamedType::Object(object)) => Ok(object),
            Some(_) => Err(Error::NotAnObject(name.to_string())),
            None => Err(Error::UnknownType(name.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Look up a type by name; unknown names are a schema inconsistency
    pub fn lookup(&self, name: &str) -> Result<&NamedType> {
        self.types
            .get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    /// All types in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    /// All object, input and interface types in declaration order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.types.values().filter_map(NamedType::as_object)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The named type a field refers to, with wrappers stripped
    pub fn named_type_of(&self, field_type: &FieldType) -> Result<&NamedType> {
        self.lookup(&field_type.name)
    }

    pub fn object(&self, name: &str) -> Result<&ObjectType> {
        self.lookup(name)?
            .as_object()
            .ok_or_else(|| Error::NotAnObject(name.to_string()))
    }

    /// Fields of an object-like type in declaration order
    pub fn fields_of(&self, name: &str) -> Result<&IndexMap<String, FieldDefinition>> {
        Ok(&self.object(name)?.fields)
    }

    /// A single field of an object-like type
    pub fn field_of(&self, type_name: &str, field: &str) -> Result<&FieldDefinition> {
        self.object(type_name)?
            .field(field)
            .ok_or_else(|| Error::UnknownField {
                type_name: type_name.to_string(),
                field: field.to_string(),
            })
    }

    /// The input type used to create an object of `name`
    pub fn input_counterpart_of(&self, name: &str) -> Result<&ObjectType> {
        self.object(&naming::input_to_create(name))
    }

    /// The input type used to update an object of `name`, if the API has one
    pub fn update_counterpart_of(&self, name: &str) -> Option<&ObjectType> {
        self.object(&naming::input_to_update(name)).ok()
    }

    /// The paging wrapper type used to list objects of `name`
    pub fn list_counterpart_of(&self, name: &str) -> Result<&ObjectType> {
        self.object(&naming::list_of(name))
    }

    pub fn enum_values(&self, name: &str) -> Result<&[String]> {
        self.lookup(name)?
            .as_enum()
            .map(|enum_type| enum_type.values.as_slice())
            .ok_or_else(|| Error::NotAnEnum(name.to_string()))
    }

    /// Concrete types behind an interface or union, in declaration order
    pub fn implementors_of(&self, name: &str) -> Vec<&ObjectType> {
        let members = match self.types.get(name) {
            Some(NamedType::Object(object)) if object.kind == ObjectKind::Union => {
                object.members.clone()
            }
            _ => Vec::new(),
        };
        self.objects()
            .filter(|object| object.kind == ObjectKind::Output)
            .filter(|object| {
                object.implements.iter().any(|i| i == name) || members.contains(&object.name)
            })
            .collect()
    }

    /// Split a relation's input counterpart into its creation strategies
    pub fn relation_input<'a>(
        &'a self,
        input_name: &str,
        config: &GeneratorConfig,
    ) -> Result<RelationInput<'a>> {
        let input = self.object(input_name)?;
        let mut relation = RelationInput {
            name: &input.name,
            connect: None,
            annotations: None,
            strategies: Vec::new(),
        };
        for field in input.fields.values() {
            match RelationField::classify(&field.name, config) {
                RelationField::Connect => relation.connect = Some(field),
                RelationField::Annotations => relation.annotations = Some(field),
                RelationField::Create => relation.strategies.push(field),
            }
        }
        Ok(relation)
    }

    /// Check that every field and argument refers to a known type
    pub fn validate_references(&self) -> Result<()> {
        for object in self.objects() {
            for field in object.fields.values() {
                self.named_type_of(&field.ty)?;
                for argument in &field.arguments {
                    self.named_type_of(&argument.ty)?;
                }
            }
            for interface in &object.implements {
                self.object(interface)?;
            }
            for member in &object.members {
                self.object(member)?;
            }
        }
        Ok(())
    }
}

/// Role of a field inside a relation's input counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    /// Reference an existing object by id
    Connect,
    /// Auxiliary edge annotations, sent alongside a strategy
    Annotations,
    /// Construct the related object inline
    Create,
}

impl RelationField {
    pub fn classify(field_name: &str, config: &GeneratorConfig) -> Self {
        if field_name == config.connect_field {
            RelationField::Connect
        } else if field_name == config.annotations_field {
            RelationField::Annotations
        } else {
            RelationField::Create
        }
    }
}

/// A relation's input counterpart, split by strategy
#[derive(Debug, Clone)]
pub struct RelationInput<'a> {
    pub name: &'a str,
    pub connect: Option<&'a FieldDefinition>,
    pub annotations: Option<&'a FieldDefinition>,
    /// Inline creation candidates; never contains the connect field
    pub strategies: Vec<&'a FieldDefinition>,
}
