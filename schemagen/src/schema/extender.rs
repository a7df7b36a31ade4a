// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// API schema extender
//
// Derives the generated API surface from a plain database schema: ids, meta
// dates, reverse edges, get/list queries, create/connect/update inputs and
// the create/update/delete mutations. The input schema is never modified.

use super::naming;
use super::types::{
    FieldDefinition, FieldType, InputValueDefinition, NamedType, ObjectKind, ObjectType, ScalarType,
};
use super::TypeSchema;
use crate::config::ExtenderConfig;
use crate::error::{Error, Result};

/// Name of the scalar used by the meta date fields
pub const DATE_TIME_SCALAR: &str = "DateTime";

/// Meta field holding the creation instant
pub const CREATION_DATE_FIELD: &str = "_creationDate";

/// Meta field holding the last update instant
pub const LAST_UPDATE_DATE_FIELD: &str = "_lastUpdateDate";

/// Field arguments that survive on database types
const KEPT_ARGUMENTS: [&str; 1] = ["filter"];

/// Derive the API schema for `base`
pub fn extend_schema(base: &TypeSchema, config: &ExtenderConfig) -> Result<TypeSchema> {
    if config.input_to_update_objects && !config.input_to_create_objects {
        return Err(Error::Config(
            "input_to_update_objects requires input_to_create_objects".to_string(),
        ));
    }

    let mut schema = base.clone();
    let db_types = database_types(&schema);
    log::debug!("Extending schema with {} database types", db_types.len());

    if config.field_for_id {
        add_id_fields(&mut schema, &db_types)?;
    }
    if config.creation_date {
        add_meta_date(&mut schema, &db_types, CREATION_DATE_FIELD)?;
    }
    if config.last_update_date {
        add_meta_date(&mut schema, &db_types, LAST_UPDATE_DATE_FIELD)?;
    }
    if config.reverse_edges {
        add_reverse_edges(&mut schema, &db_types)?;
    }
    if config.query_by_id {
        add_get_queries(&mut schema, &db_types)?;
    }
    if config.query_list_of {
        add_list_types(&mut schema, &db_types)?;
    }
    if config.input_to_create_objects {
        add_create_inputs(&mut schema, &db_types)?;
    }
    if config.input_to_update_objects {
        add_update_inputs(&mut schema, &db_types)?;
    }
    add_mutations(&mut schema, &db_types, config)?;
    remove_field_arguments(&mut schema, &db_types)?;

    schema.validate_references()?;
    Ok(schema)
}

/// Output objects and interfaces defined by the database schema itself
fn database_types(schema: &TypeSchema) -> Vec<String> {
    schema
        .objects()
        .filter(|object| matches!(object.kind, ObjectKind::Output | ObjectKind::Interface))
        .filter(|object| !object.name.starts_with('_') && !naming::is_root_type(&object.name))
        .map(|object| object.name.clone())
        .collect()
}

fn concrete_types(schema: &TypeSchema, db_types: &[String]) -> Result<Vec<String>> {
    let mut concrete = Vec::new();
    for name in db_types {
        if !schema.object(name)?.is_abstract() {
            concrete.push(name.clone());
        }
    }
    Ok(concrete)
}

fn is_relation(schema: &TypeSchema, field_type: &FieldType) -> Result<bool> {
    Ok(!schema.named_type_of(field_type)?.is_leaf())
}

fn root_type<'a>(schema: &'a mut TypeSchema, name: &str) -> Result<&'a mut ObjectType> {
    if !schema.contains(name) {
        schema.insert(NamedType::Object(ObjectType::new(name, ObjectKind::Output)));
    }
    schema.object_mut(name)
}

fn add_id_fields(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    for name in db_types {
        let object = schema.object_mut(name)?;
        if object.field("id").is_none() {
            object.add_field(FieldDefinition::new("id", FieldType::named("ID").required()));
        }
    }
    Ok(())
}

fn add_meta_date(schema: &mut TypeSchema, db_types: &[String], field_name: &str) -> Result<()> {
    if !schema.contains(DATE_TIME_SCALAR) {
        schema.insert(NamedType::Scalar(ScalarType {
            name: DATE_TIME_SCALAR.to_string(),
        }));
    }
    for name in db_types {
        schema.object_mut(name)?.add_field(FieldDefinition::new(
            field_name,
            FieldType::named(DATE_TIME_SCALAR).required(),
        ));
    }
    Ok(())
}

fn add_reverse_edges(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    let mut edges = Vec::new();
    for name in db_types {
        for field in schema.object(name)?.fields.values() {
            if field.name.starts_with('_') || !is_relation(schema, &field.ty)? {
                continue;
            }
            let target = schema.object(&field.ty.name)?;
            let mut targets = vec![target.name.clone()];
            if target.is_abstract() {
                targets.extend(
                    schema
                        .implementors_of(&target.name)
                        .into_iter()
                        .map(|implementor| implementor.name.clone()),
                );
            }
            for target_name in targets {
                edges.push((target_name, naming::reverse_edge(&field.name, name), name.clone()));
            }
        }
    }

    log::debug!("Adding {} reverse edges", edges.len());
    for (target, edge_name, source) in edges {
        let object = schema.object_mut(&target)?;
        // Unions carry no fields of their own
        if object.kind == ObjectKind::Union {
            continue;
        }
        object.add_field(FieldDefinition::new(edge_name, FieldType::list_of(source)));
    }
    Ok(())
}

fn add_get_queries(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    let query = root_type(schema, "Query")?;
    for name in db_types {
        query.add_field(
            FieldDefinition::new(naming::get_query(name), FieldType::named(name.as_str()))
                .with_argument(InputValueDefinition::new("id", FieldType::named("ID").required())),
        );
    }
    Ok(())
}

fn add_list_types(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    for name in db_types {
        let list_type = ObjectType::new(naming::list_of(name), ObjectKind::Output)
            .with_field("totalCount", FieldType::named("Int").required())
            .with_field("isEndOfWholeList", FieldType::named("Boolean").required())
            .with_field("content", FieldType::list_of(name.as_str()).required());
        schema.insert(NamedType::Object(list_type));
    }

    let query = root_type(schema, "Query")?;
    for name in db_types {
        query.add_field(
            FieldDefinition::new(naming::list_query(name), FieldType::named(naming::list_of(name)))
                .with_argument(InputValueDefinition::new("first", FieldType::named("Int")).with_default("10"))
                .with_argument(InputValueDefinition::new("after", FieldType::named("ID")).with_default("\"\"")),
        );
    }
    Ok(())
}

/// Fields of `name` that belong in its create/update inputs
fn input_fields(schema: &TypeSchema, name: &str) -> Result<Vec<FieldDefinition>> {
    Ok(schema
        .object(name)?
        .fields
        .values()
        .filter(|field| field.name != "id" && !field.name.starts_with('_'))
        .cloned()
        .collect())
}

fn add_create_inputs(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    for name in concrete_types(schema, db_types)? {
        let mut input = ObjectType::new(naming::input_to_create(&name), ObjectKind::Input);
        for field in input_fields(schema, &name)? {
            if is_relation(schema, &field.ty)? {
                let connect_name = add_connect_input(schema, &name, &field)?;
                input.add_field(FieldDefinition::new(field.name.as_str(), field.ty.rewrap(connect_name)));
            } else {
                input.add_field(FieldDefinition::new(field.name.as_str(), field.ty.clone()));
            }
        }
        schema.insert(NamedType::Object(input));
    }
    Ok(())
}

/// `_InputToConnectFOfX { connect: ID create...: ... annotations: ... }`
fn add_connect_input(schema: &mut TypeSchema, owner: &str, field: &FieldDefinition) -> Result<String> {
    let connect_name = naming::input_to_connect(&field.name, owner);
    let mut connect = ObjectType::new(connect_name.as_str(), ObjectKind::Input)
        .with_field("connect", FieldType::named("ID"));

    let target = schema.object(&field.ty.name)?;
    if target.is_abstract() {
        let implementors = schema.implementors_of(&target.name);
        if implementors.is_empty() {
            log::warn!("{} has no concrete types; {} can only connect", target.name, connect_name);
        }
        for implementor in implementors {
            connect = connect.with_field(
                naming::create_mutation(&implementor.name),
                FieldType::named(naming::input_to_create(&implementor.name)),
            );
        }
    } else {
        connect = connect.with_field("create", FieldType::named(naming::input_to_create(&target.name)));
    }

    let mut annotations = Vec::new();
    for argument in &field.arguments {
        if KEPT_ARGUMENTS.contains(&argument.name.as_str()) {
            continue;
        }
        if is_relation(schema, &argument.ty)? {
            log::warn!(
                "Skipping annotation {} on {}.{}: only scalar and enum annotations are supported",
                argument.name, owner, field.name
            );
            continue;
        }
        annotations.push(FieldDefinition::new(argument.name.as_str(), argument.ty.clone()));
    }
    if !annotations.is_empty() {
        let annotate_name = naming::input_to_annotate(&field.name, owner);
        let mut annotate = ObjectType::new(annotate_name.as_str(), ObjectKind::Input);
        for annotation in annotations {
            annotate.add_field(annotation);
        }
        schema.insert(NamedType::Object(annotate));
        connect = connect.with_field("annotations", FieldType::named(annotate_name));
    }

    schema.insert(NamedType::Object(connect));
    Ok(connect_name)
}

fn add_update_inputs(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    for name in concrete_types(schema, db_types)? {
        let mut input = ObjectType::new(naming::input_to_update(&name), ObjectKind::Input);
        for field in input_fields(schema, &name)? {
            let ty = if is_relation(schema, &field.ty)? {
                field.ty.rewrap(naming::input_to_connect(&field.name, &name))
            } else {
                field.ty.clone()
            };
            input.add_field(FieldDefinition::new(field.name.as_str(), ty.to_nullable()));
        }
        schema.insert(NamedType::Object(input));
    }
    Ok(())
}

fn add_mutations(schema: &mut TypeSchema, db_types: &[String], config: &ExtenderConfig) -> Result<()> {
    if !(config.create_objects || config.update_objects || config.delete_objects) {
        return Ok(());
    }
    let concrete = concrete_types(schema, db_types)?;
    if config.create_objects && !config.input_to_create_objects {
        return Err(Error::Config("create_objects requires input_to_create_objects".to_string()));
    }
    if config.update_objects && !config.input_to_update_objects {
        return Err(Error::Config("update_objects requires input_to_update_objects".to_string()));
    }

    let mutation = root_type(schema, "Mutation")?;
    for name in &concrete {
        if config.create_objects {
            mutation.add_field(
                FieldDefinition::new(naming::create_mutation(name), FieldType::named(name.as_str()))
                    .with_argument(InputValueDefinition::new(
                        "data",
                        FieldType::named(naming::input_to_create(name)).required(),
                    )),
            );
        }
        if config.update_objects {
            mutation.add_field(
                FieldDefinition::new(naming::update_mutation(name), FieldType::named(name.as_str()))
                    .with_argument(InputValueDefinition::new("id", FieldType::named("ID").required()))
                    .with_argument(InputValueDefinition::new(
                        "data",
                        FieldType::named(naming::input_to_update(name)).required(),
                    )),
            );
        }
    }
    if config.delete_objects {
        for name in db_types {
            mutation.add_field(
                FieldDefinition::new(naming::delete_mutation(name), FieldType::named(name.as_str()))
                    .with_argument(InputValueDefinition::new("id", FieldType::named("ID").required())),
            );
        }
    }
    Ok(())
}

fn remove_field_arguments(schema: &mut TypeSchema, db_types: &[String]) -> Result<()> {
    for name in db_types {
        for field in schema.object_mut(name)?.fields.values_mut() {
            field
                .arguments
                .retain(|argument| KEPT_ARGUMENTS.contains(&argument.name.as_str()));
        }
    }
    Ok(())
}
