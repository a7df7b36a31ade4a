//! Integration tests for input generation over extended schemas
//!
//! Covers termination on cyclic schemas, required-field completeness at every
//! depth, omission of optional fields past the depth limit, list wrapping,
//! enum rendering, flattening of connect stubs and selection depth bounds.

#[path = "testutils/mod.rs"]
mod testutils;

use serial_test::serial;

use schemagen::{
    flatten_default, render_selection, render_value, set_global_seed, GeneratedValue, GeneratorConfig,
    InputGenerator, TypeSchema,
};
use testutils::{api_schema, assert_required_fields, creation_depth, fixed_config, star_wars, CYCLIC_SDL, MUTUAL_SDL};

#[test]
fn test_cyclic_schema_terminates_for_every_limit() {
    let schema = api_schema(CYCLIC_SDL);
    let mut generator = InputGenerator::new(&schema, fixed_config(1));

    for limit in 0..8 {
        let value = generator.make_input_to_create("Node", limit, false).unwrap();
        assert!(creation_depth(&value) <= limit, "limit {} exceeded", limit);
    }
}

#[test]
fn test_mutual_recursion_terminates_with_optional_fields() {
    let schema = api_schema(MUTUAL_SDL);
    let mut generator = InputGenerator::new(&schema, fixed_config(2));

    let value = generator.make_input_to_create("Book", 5, true).unwrap();
    assert!(creation_depth(&value) <= 5);
    assert_required_fields(&schema, schema.input_counterpart_of("Book").unwrap(), &value);
}

#[test]
fn test_required_fields_present_at_every_depth() {
    let schema = star_wars();
    for seed in 0..20 {
        let mut generator = InputGenerator::new(&schema, fixed_config(seed));
        for type_name in ["Human", "Droid", "Planet", "Starship"] {
            let input_type = schema.input_counterpart_of(type_name).unwrap();
            for include_optional in [false, true] {
                let value = generator.make_input_to_create(type_name, 3, include_optional).unwrap();
                assert_required_fields(&schema, input_type, &value);
            }
        }
    }
}

#[test]
fn test_optional_fields_omitted_at_limit() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(4));
    let input_type = schema.input_counterpart_of("Human").unwrap();

    for include_optional in [false, true] {
        let value = generator.generate_create_input(input_type, 2, 2, include_optional).unwrap();
        let entries = value.as_object().unwrap();
        for (name, field) in &input_type.fields {
            assert_eq!(entries.contains_key(name), !field.ty.nullable, "field {}", name);
        }
    }
}

#[test]
fn test_required_relation_past_limit_is_connect_stub() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(5));
    let value = generator.make_input_to_create("Starship", 0, false).unwrap();

    let pilot = value.get("pilot").unwrap();
    let id = pilot.get("connect").and_then(GeneratedValue::as_str).unwrap();
    assert!(id.starts_with("Dummy/"));

    let crew = value.get("crew").and_then(GeneratedValue::as_list).unwrap();
    assert_eq!(crew.len(), 1);
    assert!(crew[0].get("connect").is_some());
}

#[test]
fn test_list_fields_wrapped_in_single_element_list() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(6));
    let value = generator.make_input_to_create("Human", 3, true).unwrap();

    for name in ["appearsIn", "friends", "starships"] {
        let items = value.get(name).and_then(GeneratedValue::as_list).unwrap();
        assert_eq!(items.len(), 1, "field {}", name);
    }
    assert!(value.get("homePlanet").unwrap().as_list().is_none());
}

#[test]
fn test_enums_render_without_quotes() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(7));
    let value = generator.make_input_to_create("Droid", 2, false).unwrap();

    let episode = value.get("appearsIn").and_then(GeneratedValue::as_list).unwrap()[0]
        .as_str()
        .unwrap()
        .to_string();
    let rendered = render_value(&value);
    assert!(rendered.contains(&format!("\n    {}\n", episode)));
    assert!(!rendered.contains(&format!("\"{}\"", episode)));
    assert!(rendered.contains("name: \""));
    assert!(!rendered.contains("\"name\""));
}

#[test]
fn test_flatten_turns_connect_into_id() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(8));
    let value = generator.make_input_to_create("Starship", 0, false).unwrap();
    let stub_id = value.get("pilot").and_then(|p| p.get("connect")).cloned().unwrap();

    let entity = flatten_default(&value);
    assert_eq!(entity.get("pilot").and_then(|p| p.get("id")), Some(&stub_id));
    assert!(entity.get("pilot").and_then(|p| p.get("connect")).is_none());
}

#[test]
fn test_flatten_removes_every_strategy_wrapper() {
    let schema = star_wars();
    let mut generator = InputGenerator::new(&schema, fixed_config(9));
    let value = generator.make_input_to_create("Starship", 4, true).unwrap();

    let entity = flatten_default(&value);
    assert_eq!(creation_depth(entity.value()), 0);
    assert!(!entity.to_json().to_string().contains("\"annotations\""));
}

#[test]
fn test_flatten_keeps_relation_named_like_a_strategy() {
    let schema = api_schema("type User { name: String! } type Post { createdBy: User! }");
    let mut generator = InputGenerator::new(&schema, fixed_config(10));
    let value = generator.make_input_to_create("Post", 3, false).unwrap();
    let author = value
        .get("createdBy")
        .and_then(|relation| relation.get("create"))
        .and_then(|payload| payload.get("name"))
        .cloned()
        .unwrap();

    let entity = flatten_default(&value);
    assert_eq!(entity.get("createdBy").and_then(|user| user.get("name")), Some(&author));
    assert!(entity.get("name").is_none());
}

#[test]
fn test_selection_depth_bound() {
    let schema = TypeSchema::from_sdl(
        r#"
        type First { label: String second: Second }
        type Second { label: String third: Third }
        type Third { label: String fourth: Fourth }
        type Fourth { secret: String }
        "#,
    )
    .unwrap();
    let first = schema.object("First").unwrap();

    let selection = render_selection(&schema, first, 0, 2).unwrap();
    assert_eq!(selection, "{ label second { label third { label fourth } } }");
    assert!(!selection.contains("secret"));
}

#[test]
fn test_selection_over_extended_schema_is_bounded() {
    let schema = star_wars();
    let human = schema.object("Human").unwrap();

    for limit in 0..4 {
        let selection = render_selection(&schema, human, 0, limit).unwrap();
        let mut depth = 0usize;
        let mut deepest = 0usize;
        for c in selection.chars() {
            match c {
                '{' => {
                    depth += 1;
                    deepest = deepest.max(depth);
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        assert_eq!(depth, 0);
        assert!(deepest <= limit + 1, "limit {} produced depth {}", limit, deepest);
    }
}

#[test]
fn test_speaker_example() {
    let schema = TypeSchema::from_sdl(
        r#"
        input _InputToCreateSpeaker {
            name: String!
            age: Int
        }
        "#,
    )
    .unwrap();
    let speaker = schema.object("_InputToCreateSpeaker").unwrap();
    let mut generator = InputGenerator::new(&schema, fixed_config(10));

    let required_only = generator.generate_create_input(speaker, 0, 3, false).unwrap();
    assert!(required_only.get("name").is_some());
    assert!(required_only.get("age").is_none());

    let with_optional = generator.generate_create_input(speaker, 0, 3, true).unwrap();
    assert!(with_optional.get("name").is_some());
    assert!(with_optional.get("age").is_some());
}

#[test]
fn test_dates_are_rfc3339_before_reference() {
    let schema = star_wars();
    let config = fixed_config(11);
    let reference = config.reference_time.unwrap();
    let mut generator = InputGenerator::new(&schema, config);

    let value = generator.make_input_to_create("Planet", 1, true).unwrap();
    let discovered = value.get("discovered").and_then(GeneratedValue::as_str).unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(discovered).unwrap();
    assert!(parsed < reference);
}

#[test]
#[serial]
fn test_global_seed_makes_unseeded_generators_reproducible() {
    let schema = star_wars();
    let config = GeneratorConfig {
        seed: None,
        ..fixed_config(0)
    };

    set_global_seed(1234);
    let first = InputGenerator::new(&schema, config.clone())
        .make_input_to_create("Human", 4, true)
        .unwrap();

    set_global_seed(1234);
    let second = InputGenerator::new(&schema, config)
        .make_input_to_create("Human", 4, true)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_generators_forked_from_global_are_independent() {
    let schema = star_wars();
    let config = GeneratorConfig {
        seed: None,
        ..fixed_config(0)
    };

    set_global_seed(77);
    let mut left = InputGenerator::new(&schema, config.clone());
    let mut right = InputGenerator::new(&schema, config);

    let a = left.make_input_to_create("Planet", 1, true).unwrap();
    let b = right.make_input_to_create("Planet", 1, true).unwrap();
    assert_ne!(a, b);
}
