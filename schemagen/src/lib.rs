// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! schemagen - schema-driven synthetic input and query generation for GraphQL APIs
//!
//! Given a type schema, this crate produces random but schema-valid create
//! inputs for any object type, renders them as GraphQL argument text, builds
//! depth-bounded selection sets, and flattens nested create/connect inputs
//! into the entity shape a read should return.
//!
//! # Quick Start
//!
//! ```no_run
//! use schemagen::{GeneratorConfig, InputGenerator, TypeSchema, render_value, extend_schema, ExtenderConfig};
//!
//! # fn main() -> schemagen::Result<()> {
//! let base = TypeSchema::from_path("schema.graphql")?;
//! let schema = extend_schema(&base, &ExtenderConfig::default())?;
//!
//! let mut generator = InputGenerator::new(&schema, GeneratorConfig::reproducible(42));
//! let input = generator.make_input_to_create("Human", 6, false)?;
//! println!("createHuman(data: {})", render_value(&input));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`schema`] - Type schema model, SDL loader, API extender and printer
//! - [`generator`] - Random source, scalar generators and the input generator
//! - [`render`] - GraphQL text for values and selection sets
//! - [`flatten`] - Create/connect input to entity shape
//! - [`plan`] - Per-type create/get/update/list operation documents
//! - [`config`] - Generator and extender configuration
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod flatten;
pub mod generator;
pub mod plan;
pub mod render;
pub mod schema;

pub use config::{ExtenderConfig, GeneratorConfig};
pub use error::{Error, Result};
pub use flatten::{flatten, flatten_default, Entity};
pub use generator::{set_global_seed, GeneratedValue, InputGenerator, RandomSource, ScalarKind};
pub use plan::{OperationPlanner, TypePlan};
pub use render::{render_selection, render_value};
pub use schema::{extend_schema, parse_schema, FieldType, NamedType, ObjectKind, ObjectType, TypeSchema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
