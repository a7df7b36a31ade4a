// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operation planning
//!
//! For every testable object type, the planner prepares the documents of a
//! create / get / update / list round: a generated create input, a second
//! independently generated update input, a depth-bounded selection and the
//! entity the create input should read back as.

use regex::Regex;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::flatten::{flatten, Entity};
use crate::generator::{GeneratedValue, InputGenerator};
use crate::render::{render_selection, render_value};
use crate::schema::{naming, ObjectKind, TypeSchema};

/// Prepared operations for one object type
#[derive(Debug, Clone, Serialize)]
pub struct TypePlan {
    pub type_name: String,
    pub create_input: GeneratedValue,
    pub update_input: GeneratedValue,
    pub selection: String,
    pub expected_entity: Entity,
    pub page_size: usize,
}

impl TypePlan {
    pub fn create_mutation(&self) -> String {
        format!(
            "mutation {{\n  {}(data: {}) {{ id }}\n}}",
            naming::create_mutation(&self.type_name),
            indent_continuation(&render_value(&self.create_input))
        )
    }

    pub fn get_query(&self, id: &str) -> String {
        format!(
            "query {{\n  {}(id: {}) {}\n}}",
            naming::get_query(&self.type_name),
            quoted(id),
            self.selection
        )
    }

    pub fn update_mutation(&self, id: &str) -> String {
        format!(
            "mutation {{\n  {}(id: {}, data: {}) {{ id }}\n}}",
            naming::update_mutation(&self.type_name),
            quoted(id),
            indent_continuation(&render_value(&self.update_input))
        )
    }

    pub fn list_query(&self) -> String {
        format!(
            "query {{\n  {}(first: {}, after: \"\") {{ totalCount isEndOfWholeList content {} }}\n}}",
            naming::list_query(&self.type_name),
            self.page_size,
            self.selection
        )
    }

    pub fn delete_mutation(&self, id: &str) -> String {
        format!(
            "mutation {{\n  {}(id: {}) {{ id }}\n}}",
            naming::delete_mutation(&self.type_name),
            quoted(id)
        )
    }
}

fn quoted(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Shift every line after the first by the operation body indent
fn indent_continuation(text: &str) -> String {
    text.replace('\n', "\n  ")
}

/// Builds [`TypePlan`]s for the object types of an API schema
pub struct OperationPlanner<'a> {
    generator: InputGenerator<'a>,
    exclude: Vec<Regex>,
}

impl<'a> OperationPlanner<'a> {
    pub fn new(schema: &'a TypeSchema, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let exclude = config
            .exclude_types
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            generator: InputGenerator::new(schema, config),
            exclude,
        })
    }

    /// Object types that can go through a create/get/update/list round
    pub fn testable_types(&self) -> Vec<String> {
        let schema = self.generator.schema();
        schema
            .objects()
            .filter(|object| object.kind == ObjectKind::Output)
            .filter(|object| !naming::is_root_type(&object.name))
            .filter(|object| !self.generator.config().is_reserved(&object.name))
            .filter(|object| !self.exclude.iter().any(|re| re.is_match(&object.name)))
            .filter(|object| {
                let has_input = schema.input_counterpart_of(&object.name).is_ok();
                if !has_input {
                    log::debug!("Skipping {}: no create input", object.name);
                }
                has_input
            })
            .map(|object| object.name.clone())
            .collect()
    }

    pub fn plan_type(&mut self, type_name: &str) -> Result<TypePlan> {
        let schema = self.generator.schema();
        let object = schema.object(type_name)?;

        let create_input = self.generator.create_input(type_name)?;
        let update_input = self.generator.update_input(type_name)?;
        let config = self.generator.config();
        let selection = render_selection(schema, object, 0, config.selection_depth_limit)?;
        let expected_entity = flatten(&create_input, config);

        Ok(TypePlan {
            type_name: type_name.to_string(),
            create_input,
            update_input,
            selection,
            expected_entity,
            page_size: config.list_page_size,
        })
    }

    pub fn plan_all(&mut self) -> Result<Vec<TypePlan>> {
        let types = self.testable_types();
        log::debug!("Planning operations for {} types", types.len());
        types.iter().map(|name| self.plan_type(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtenderConfig;
    use crate::schema::extend_schema;

    const BASE: &str = r#"
        type Planet { name: String! }
        type Human {
            name: String!
            homePlanet: Planet!
        }
        type HumanEdgeFromPlanet { weight: Int }
    "#;

    fn api() -> TypeSchema {
        let base = TypeSchema::from_sdl(BASE).unwrap();
        extend_schema(&base, &ExtenderConfig::default()).unwrap()
    }

    #[test]
    fn test_testable_types_skip_roots_reserved_and_excluded() {
        let schema = api();
        let planner = OperationPlanner::new(&schema, GeneratorConfig::reproducible(1)).unwrap();
        assert_eq!(planner.testable_types(), vec!["Planet", "Human"]);
    }

    #[test]
    fn test_plan_documents() {
        let schema = api();
        let mut planner = OperationPlanner::new(&schema, GeneratorConfig::reproducible(1)).unwrap();
        let plan = planner.plan_type("Human").unwrap();

        assert!(plan.create_mutation().starts_with("mutation {\n  createHuman(data: {"));
        assert!(plan.get_query("42").contains("human(id: \"42\") { "));
        assert!(plan.update_mutation("42").contains("updateHuman(id: \"42\", data: "));
        assert!(plan.list_query().contains("listOfHumans(first: 7, after: \"\")"));
        assert_eq!(plan.delete_mutation("42"), "mutation {\n  deleteHuman(id: \"42\") { id }\n}");
        assert!(plan.selection.contains("homePlanet { "));
    }

    #[test]
    fn test_expected_entity_flattens_create_input() {
        let schema = api();
        let mut planner = OperationPlanner::new(&schema, GeneratorConfig::reproducible(3)).unwrap();
        let plan = planner.plan_type("Human").unwrap();

        let home = plan.expected_entity.get("homePlanet").unwrap();
        assert!(home.get("name").is_some());
        assert!(home.get("create").is_none());
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let schema = api();
        let config = GeneratorConfig {
            exclude_types: vec!["(".to_string()],
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            OperationPlanner::new(&schema, config),
            Err(crate::error::Error::InvalidPattern(_))
        ));
    }
}
