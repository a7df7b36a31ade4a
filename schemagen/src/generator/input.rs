// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Schema-driven input generator
//
// Builds random create/update inputs by walking input types. Depth only grows
// when a relation is constructed inline; once it reaches the limit, nullable
// fields are dropped and required relations become connect stubs, which is
// what bounds the walk on cyclic schemas.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::random::RandomSource;
use super::scalars::ScalarKind;
use super::value::GeneratedValue;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::schema::{FieldDefinition, NamedType, ObjectType, TypeSchema};

const MAX_PLACEHOLDER_ID: u32 = 99_999;

/// Random input generator bound to one schema
pub struct InputGenerator<'a> {
    schema: &'a TypeSchema,
    config: GeneratorConfig,
    source: RandomSource,
    reference_time: DateTime<Utc>,
}

impl<'a> InputGenerator<'a> {
    /// Generator seeded from `config.seed`, or forked from the global source
    pub fn new(schema: &'a TypeSchema, config: GeneratorConfig) -> Self {
        let source = RandomSource::from_seed_or_global(config.seed);
        Self::with_source(schema, config, source)
    }

    pub fn with_source(schema: &'a TypeSchema, config: GeneratorConfig, source: RandomSource) -> Self {
        let reference_time = config.reference_time.unwrap_or_else(Utc::now);
        Self {
            schema,
            config,
            source,
            reference_time,
        }
    }

    pub fn schema(&self) -> &'a TypeSchema {
        self.schema
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut RandomSource {
        &mut self.source
    }

    /// Generate a value for `input_type` starting at `depth`
    ///
    /// Fields are visited in declaration order. Reserved-prefix fields are
    /// never generated, and nullable fields are skipped unless
    /// `include_optional` is set and `depth < depth_limit`. List fields get a
    /// single-element list.
    pub fn generate_create_input(
        &mut self,
        input_type: &ObjectType,
        depth: usize,
        depth_limit: usize,
        include_optional: bool,
    ) -> Result<GeneratedValue> {
        let mut entries = IndexMap::new();
        for field in input_type.fields.values() {
            if self.config.is_reserved(&field.name) {
                continue;
            }
            if field.ty.nullable && (!include_optional || depth >= depth_limit) {
                log::trace!("Skipping optional field {}.{} at depth {}", input_type.name, field.name, depth);
                continue;
            }

            let value = self.generate_field(input_type, field, depth, depth_limit, include_optional)?;
            let value = if field.ty.is_list {
                GeneratedValue::List(vec![value])
            } else {
                value
            };
            entries.insert(field.name.clone(), value);
        }
        Ok(GeneratedValue::Object(entries))
    }

    /// Create input for the object type `object_name`, from depth 0
    pub fn make_input_to_create(
        &mut self,
        object_name: &str,
        depth_limit: usize,
        include_optional: bool,
    ) -> Result<GeneratedValue> {
        let schema = self.schema;
        let input_type = schema.input_counterpart_of(object_name)?;
        log::debug!("Generating {} with depth limit {}", input_type.name, depth_limit);
        self.generate_create_input(input_type, 0, depth_limit, include_optional)
    }

    /// Update input for `object_name`
    ///
    /// Regenerates the create input at `depth_limit`. With
    /// `use_update_inputs` set, the schema's `_InputToUpdate` type is used
    /// instead when it exists.
    pub fn make_input_to_update(
        &mut self,
        object_name: &str,
        depth_limit: usize,
        include_optional: bool,
    ) -> Result<GeneratedValue> {
        let schema = self.schema;
        let update_type = if self.config.use_update_inputs {
            schema.update_counterpart_of(object_name)
        } else {
            None
        };
        match update_type {
            Some(input_type) => {
                log::debug!("Generating {} with depth limit {}", input_type.name, depth_limit);
                self.generate_create_input(input_type, 0, depth_limit, include_optional)
            }
            None => self.make_input_to_create(object_name, depth_limit, include_optional),
        }
    }

    /// Create input using the configured create depth limit
    pub fn create_input(&mut self, object_name: &str) -> Result<GeneratedValue> {
        let (limit, optional) = (self.config.create_depth_limit, self.config.include_optional);
        self.make_input_to_create(object_name, limit, optional)
    }

    /// Update input using the configured update depth limit
    pub fn update_input(&mut self, object_name: &str) -> Result<GeneratedValue> {
        let (limit, optional) = (self.config.update_depth_limit, self.config.include_optional);
        self.make_input_to_update(object_name, limit, optional)
    }

    fn generate_field(
        &mut self,
        owner: &ObjectType,
        field: &FieldDefinition,
        depth: usize,
        depth_limit: usize,
        include_optional: bool,
    ) -> Result<GeneratedValue> {
        let schema = self.schema;
        match schema.named_type_of(&field.ty)? {
            NamedType::Enum(enum_type) => {
                let value = self
                    .source
                    .pick(&enum_type.values)
                    .ok_or_else(|| Error::EmptyEnum(enum_type.name.clone()))?;
                Ok(GeneratedValue::Enum(value.clone()))
            }
            NamedType::Scalar(scalar) => {
                Ok(ScalarKind::classify(&scalar.name).generate(&mut self.source, self.reference_time))
            }
            NamedType::Object(relation) if depth >= depth_limit => {
                log::debug!(
                    "Depth limit {} reached at {}.{}, connecting to a placeholder {}",
                    depth_limit, owner.name, field.name, relation.name
                );
                Ok(self.connect_stub())
            }
            NamedType::Object(relation) => {
                self.generate_relation(relation, depth, depth_limit, include_optional)
            }
        }
    }

    /// `{annotations: ..., create...: ...}` for a relation input
    fn generate_relation(
        &mut self,
        relation: &ObjectType,
        depth: usize,
        depth_limit: usize,
        include_optional: bool,
    ) -> Result<GeneratedValue> {
        let schema = self.schema;
        let relation_input = schema.relation_input(&relation.name, &self.config)?;
        let mut entries = IndexMap::new();

        if let Some(annotations) = relation_input.annotations {
            let annotations_type = schema.object(&annotations.ty.name)?;
            let value = self.generate_create_input(annotations_type, depth + 1, depth_limit, include_optional)?;
            entries.insert(annotations.name.clone(), value);
        }

        let strategy = self
            .source
            .pick(&relation_input.strategies)
            .copied()
            .ok_or_else(|| Error::NoCreationStrategy(relation.name.clone()))?;
        log::debug!("Creating {} via {} at depth {}", relation.name, strategy.name, depth + 1);

        let payload_type = schema.object(&strategy.ty.name)?;
        let payload = self.generate_create_input(payload_type, depth + 1, depth_limit, include_optional)?;
        entries.insert(strategy.name.clone(), payload);

        Ok(GeneratedValue::Object(entries))
    }

    fn connect_stub(&mut self) -> GeneratedValue {
        let id = format!(
            "{}{}",
            self.config.placeholder_id_prefix,
            self.source.u32_in(0..=MAX_PLACEHOLDER_ID)
        );
        GeneratedValue::object_from([(self.config.connect_field.clone(), GeneratedValue::String(id))])
    }
}
