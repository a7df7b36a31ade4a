// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for schemagen

use colored::Colorize;
use std::path::Path;

use super::commands::{GeneratorArgs, OutputFormat, SchemaArgs};
use super::output::{summarize_types, TypeFormatter};
use schemagen::{
    extend_schema, flatten, render_selection, render_value, ExtenderConfig, GeneratorConfig, InputGenerator,
    OperationPlanner, TypePlan, TypeSchema,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Handle the version command
pub fn handle_version() -> CliResult {
    println!("{}", format!("schemagen {}", schemagen::VERSION).bold().green());
    println!("  Schema-driven GraphQL input and query generator");
    Ok(())
}

/// Handle the types command
pub fn handle_types(args: SchemaArgs, format: OutputFormat) -> CliResult {
    let schema = load_schema(&args)?;
    let planner = OperationPlanner::new(&schema, GeneratorConfig::default())?;
    let summaries = summarize_types(&schema, &planner.testable_types());

    match format {
        OutputFormat::Json => println!("{}", TypeFormatter::json(&summaries)?),
        _ => println!("{}", TypeFormatter::table(&summaries)),
    }
    Ok(())
}

/// Handle the generate command
pub fn handle_generate(
    args: SchemaArgs,
    generator_args: GeneratorArgs,
    type_name: String,
    depth: Option<usize>,
    update: bool,
    format: OutputFormat,
) -> CliResult {
    let schema = load_schema(&args)?;
    let config = load_generator_config(&generator_args)?;
    let include_optional = config.include_optional;
    let mut generator = InputGenerator::new(&schema, config.clone());

    let value = if update {
        let limit = depth.unwrap_or(config.update_depth_limit);
        generator.make_input_to_update(&type_name, limit, include_optional)?
    } else {
        let limit = depth.unwrap_or(config.create_depth_limit);
        generator.make_input_to_create(&type_name, limit, include_optional)?
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        _ => println!("{}", render_value(&value)),
    }
    Ok(())
}

/// Handle the selection command
pub fn handle_selection(args: SchemaArgs, type_name: String, depth: usize) -> CliResult {
    let schema = load_schema(&args)?;
    let object = schema.object(&type_name)?;
    println!("{}", render_selection(&schema, object, 0, depth)?);
    Ok(())
}

/// Handle the flatten command
pub fn handle_flatten(
    args: SchemaArgs,
    generator_args: GeneratorArgs,
    type_name: String,
    depth: Option<usize>,
) -> CliResult {
    let schema = load_schema(&args)?;
    let config = load_generator_config(&generator_args)?;
    let limit = depth.unwrap_or(config.create_depth_limit);
    let mut generator = InputGenerator::new(&schema, config.clone());

    let input = generator.make_input_to_create(&type_name, limit, config.include_optional)?;
    let entity = flatten(&input, &config);

    println!("{}", "Input:".bold());
    println!("{}", render_value(&input));
    println!("{}", "Entity:".bold());
    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}

/// Handle the plan command
pub fn handle_plan(
    args: SchemaArgs,
    generator_args: GeneratorArgs,
    type_name: Option<String>,
    format: OutputFormat,
) -> CliResult {
    let schema = load_schema(&args)?;
    let config = load_generator_config(&generator_args)?;
    let mut planner = OperationPlanner::new(&schema, config)?;

    let plans = match type_name {
        Some(name) => vec![planner.plan_type(&name)?],
        None => planner.plan_all()?,
    };
    if plans.is_empty() {
        println!("{}", "No testable types found. Try --extend on a base schema.".yellow());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plans)?),
        _ => {
            for plan in &plans {
                print_plan(plan);
            }
            println!("{}", format!("{} type(s) planned", plans.len()).green());
        }
    }
    Ok(())
}

/// Handle the extend command
pub fn handle_extend(schema_path: &Path, extender_config: Option<&Path>) -> CliResult {
    let base = TypeSchema::from_path(schema_path)?;
    let config = match extender_config {
        Some(path) => ExtenderConfig::from_path(path)?,
        None => ExtenderConfig::default(),
    };
    print!("{}", extend_schema(&base, &config)?);
    Ok(())
}

fn print_plan(plan: &TypePlan) {
    let id = format!("{}/1", plan.type_name);
    println!("{}", format!("# {}", plan.type_name).bold().cyan());
    println!("{}", plan.create_mutation());
    println!("{}", plan.get_query(&id));
    println!("{}", plan.update_mutation(&id));
    println!("{}", plan.list_query());
    println!("{}", "# expected entity".dimmed());
    println!("{}\n", plan.expected_entity);
}

/// Load the schema, extending it when asked to
fn load_schema(args: &SchemaArgs) -> Result<TypeSchema, Box<dyn std::error::Error>> {
    let schema = TypeSchema::from_path(&args.schema)
        .map_err(|e| format!("Failed to load schema {:?}: {}", args.schema, e))?;
    if !args.extend && args.extender_config.is_none() {
        return Ok(schema);
    }

    let config = match &args.extender_config {
        Some(path) => ExtenderConfig::from_path(path)?,
        None => ExtenderConfig::default(),
    };
    log::info!("Extending schema with {} types", schema.len());
    Ok(extend_schema(&schema, &config)?)
}

/// Configuration file values, overridden by command-line flags
fn load_generator_config(args: &GeneratorArgs) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.include_optional {
        config.include_optional = true;
    }
    if args.update_inputs {
        config.use_update_inputs = true;
    }
    Ok(config)
}
