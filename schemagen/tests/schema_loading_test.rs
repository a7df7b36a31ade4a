//! Integration tests for loading schemas and configuration from disk

#[path = "testutils/mod.rs"]
mod testutils;

use std::fs;
use tempfile::TempDir;

use schemagen::schema::extender::{CREATION_DATE_FIELD, DATE_TIME_SCALAR};
use schemagen::{extend_schema, Error, ExtenderConfig, GeneratorConfig, TypeSchema};
use testutils::{star_wars, STAR_WARS_SDL};

#[test]
fn test_load_schema_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("starwars.graphql");
    fs::write(&path, STAR_WARS_SDL).unwrap();

    let schema = TypeSchema::from_path(&path).unwrap();
    assert!(schema.contains("Human"));
    assert_eq!(schema.enum_values("Episode").unwrap(), ["NEWHOPE", "EMPIRE", "JEDI"]);
    let members: Vec<_> = schema
        .implementors_of("SearchResult")
        .into_iter()
        .map(|object| object.name.as_str())
        .collect();
    assert_eq!(members, vec!["Human", "Droid", "Starship"]);
}

#[test]
fn test_missing_schema_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = TypeSchema::from_path(temp_dir.path().join("absent.graphql"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_extended_schema_prints_and_reparses() {
    let schema = star_wars();
    let printed = schema.to_string();
    assert!(printed.contains("input _InputToCreateHuman {"));
    assert!(printed.contains("type _ListOfHumans {"));
    assert!(printed.contains(&format!("  {}: {}!", CREATION_DATE_FIELD, DATE_TIME_SCALAR)));

    let reparsed = TypeSchema::from_sdl(&printed).unwrap();
    assert_eq!(reparsed, schema);
}

#[test]
fn test_extending_twice_is_stable() {
    let once = star_wars();
    let twice = extend_schema(&once, &ExtenderConfig::default());
    // Generated types are reserved and never treated as database types again
    let twice = twice.unwrap();
    assert!(twice.input_counterpart_of("Human").is_ok());
    assert!(!twice.contains("_InputToCreate_ListOfHumans"));
}

#[test]
fn test_generator_config_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("generator.json");
    fs::write(&path, r#"{ "create_depth_limit": 2, "seed": 9, "exclude_types": [] }"#).unwrap();

    let config = GeneratorConfig::from_path(&path).unwrap();
    assert_eq!(config.create_depth_limit, 2);
    assert_eq!(config.seed, Some(9));
    assert!(config.exclude_types.is_empty());
    assert_eq!(config.update_depth_limit, GeneratorConfig::default().update_depth_limit);
}

#[test]
fn test_invalid_generator_config_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("generator.json");
    fs::write(&path, r#"{ "connect_field": "createLink" }"#).unwrap();
    assert!(matches!(GeneratorConfig::from_path(&path), Err(Error::Config(_))));

    fs::write(&path, "not json").unwrap();
    assert!(matches!(GeneratorConfig::from_path(&path), Err(Error::Serialization(_))));
}

#[test]
fn test_extender_config_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("extender.json");
    fs::write(&path, r#"{ "reverse_edges": false, "delete_objects": false }"#).unwrap();

    let config = ExtenderConfig::from_path(&path).unwrap();
    let base = TypeSchema::from_sdl(STAR_WARS_SDL).unwrap();
    let schema = extend_schema(&base, &config).unwrap();

    assert!(schema.object("Planet").unwrap().field("_homePlanetFromHuman").is_none());
    assert!(schema.object("Mutation").unwrap().field("deleteHuman").is_none());
    assert!(schema.object("Mutation").unwrap().field("createHuman").is_some());
}
