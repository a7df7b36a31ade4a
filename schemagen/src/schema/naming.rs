// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Naming conventions of the generated API surface

/// Root operation type names
pub const ROOT_TYPES: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// Make the first letter upper case
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Make the first letter lower case
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_root_type(name: &str) -> bool {
    ROOT_TYPES.contains(&name)
}

/// `_InputToCreateX`
pub fn input_to_create(type_name: &str) -> String {
    format!("_InputToCreate{}", type_name)
}

/// `_InputToUpdateX`
pub fn input_to_update(type_name: &str) -> String {
    format!("_InputToUpdate{}", type_name)
}

/// `_InputToConnectFieldOfX`
pub fn input_to_connect(field_name: &str, type_name: &str) -> String {
    format!("_InputToConnect{}Of{}", capitalize(field_name), type_name)
}

/// `_InputToAnnotateFieldEdgeFromX`
pub fn input_to_annotate(field_name: &str, type_name: &str) -> String {
    format!("_InputToAnnotate{}", edge_from(field_name, type_name))
}

/// `FieldEdgeFromX`
pub fn edge_from(field_name: &str, type_name: &str) -> String {
    format!("{}EdgeFrom{}", capitalize(field_name), type_name)
}

/// `_ListOfXs`
pub fn list_of(type_name: &str) -> String {
    format!("_ListOf{}s", type_name)
}

/// `_fieldFromX`
pub fn reverse_edge(field_name: &str, type_name: &str) -> String {
    format!("_{}From{}", field_name, type_name)
}

/// Query field fetching one object by id: `x`
pub fn get_query(type_name: &str) -> String {
    decapitalize(type_name)
}

/// Query field listing objects: `listOfXs`
pub fn list_query(type_name: &str) -> String {
    format!("listOf{}s", type_name)
}

pub fn create_mutation(type_name: &str) -> String {
    format!("create{}", type_name)
}

pub fn update_mutation(type_name: &str) -> String {
    format!("update{}", capitalize(type_name))
}

pub fn delete_mutation(type_name: &str) -> String {
    format!("delete{}", type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_helpers() {
        assert_eq!(capitalize("origin"), "Origin");
        assert_eq!(decapitalize("Planet"), "planet");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_generated_names() {
        assert_eq!(input_to_create("Planet"), "_InputToCreatePlanet");
        assert_eq!(input_to_connect("origin", "Species"), "_InputToConnectOriginOfSpecies");
        assert_eq!(input_to_annotate("friends", "Human"), "_InputToAnnotateFriendsEdgeFromHuman");
        assert_eq!(list_of("Planet"), "_ListOfPlanets");
        assert_eq!(reverse_edge("origin", "Species"), "_originFromSpecies");
        assert_eq!(list_query("Planet"), "listOfPlanets");
        assert_eq!(get_query("Species"), "species");
    }
}
