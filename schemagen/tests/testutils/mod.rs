//! Shared fixtures for schemagen integration tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use schemagen::schema::{NamedType, ObjectType, RelationField};
use schemagen::{extend_schema, ExtenderConfig, GeneratedValue, GeneratorConfig, TypeSchema};

/// Star Wars style database schema with an interface, a union, an enum and
/// annotated edges
pub const STAR_WARS_SDL: &str = r#"
# Base schema; the API surface is derived by the extender
enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

scalar Url

interface Character {
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
}

type Human implements Character {
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  homePlanet(visits: Int, filter: String): Planet!
  starships: [Starship!]
  height: Float
  profile: Url
}

type Droid implements Character {
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  primaryFunction: String
  builtOn: Planet
}

type Planet {
  name: String!
  climate: String
  discovered: DateTime
}

type Starship {
  name: String!
  length: Float
  pilot: Human!
  crew: [Character!]!
}

union SearchResult = Human | Droid | Starship

scalar DateTime
"#;

/// Schema whose only type refers to itself through required fields
pub const CYCLIC_SDL: &str = r#"
type Node {
  label: String!
  weight: Int
  next: Node!
  children: [Node!]!
}
"#;

/// Two types that require each other
pub const MUTUAL_SDL: &str = r#"
type Author {
  name: String!
  latest: Book!
}

type Book {
  title: String!
  author: Author!
  editor: Author
}
"#;

/// Extend a base SDL document with the full API surface
pub fn api_schema(sdl: &str) -> TypeSchema {
    let base = TypeSchema::from_sdl(sdl).expect("fixture SDL should parse");
    extend_schema(&base, &ExtenderConfig::default()).expect("fixture SDL should extend")
}

pub fn star_wars() -> TypeSchema {
    api_schema(STAR_WARS_SDL)
}

/// Seeded configuration with a fixed reference time
pub fn fixed_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        reference_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        ..GeneratorConfig::reproducible(seed)
    }
}

/// Panics unless every required field of `input_type` is present in `value`,
/// recursing into inline-created relations
pub fn assert_required_fields(schema: &TypeSchema, input_type: &ObjectType, value: &GeneratedValue) {
    let config = GeneratorConfig::default();
    let entries = value
        .as_object()
        .unwrap_or_else(|| panic!("{} value is not an object: {:?}", input_type.name, value));

    for field in input_type.fields.values() {
        if config.is_reserved(&field.name) {
            assert!(!entries.contains_key(&field.name), "reserved field {} generated", field.name);
            continue;
        }
        let Some(field_value) = entries.get(&field.name) else {
            assert!(field.ty.nullable, "required field {}.{} missing", input_type.name, field.name);
            continue;
        };

        let items: Vec<&GeneratedValue> = match field_value.as_list() {
            Some(items) => items.iter().collect(),
            None => vec![field_value],
        };
        if let Some(NamedType::Object(relation)) = schema.get(&field.ty.name) {
            for item in items {
                assert_relation(schema, relation, item, &config);
            }
        }
    }
}

fn assert_relation(schema: &TypeSchema, relation: &ObjectType, value: &GeneratedValue, config: &GeneratorConfig) {
    let entries = value.as_object().expect("relation value should be an object");
    for (key, payload) in entries {
        match RelationField::classify(key, config) {
            RelationField::Connect => {
                assert_eq!(entries.len(), 1, "connect stub must stand alone");
            }
            RelationField::Annotations | RelationField::Create => {
                let payload_type = schema
                    .field_of(&relation.name, key)
                    .and_then(|field| schema.object(&field.ty.name))
                    .expect("strategy payload type should exist");
                assert_required_fields(schema, payload_type, payload);
            }
        }
    }
}

/// Deepest level of inline construction in a generated input
pub fn creation_depth(value: &GeneratedValue) -> usize {
    let config = GeneratorConfig::default();
    match value {
        GeneratedValue::Object(entries) => entries
            .iter()
            .map(|(key, entry)| {
                let nested = creation_depth(entry);
                if config.is_create_strategy(key) { nested + 1 } else { nested }
            })
            .max()
            .unwrap_or(0),
        GeneratedValue::List(items) => items.iter().map(creation_depth).max().unwrap_or(0),
        _ => 0,
    }
}
