// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Generator and extender configuration
//!
//! Both configurations deserialize from JSON with every field optional, so a
//! config file only needs to name the values it overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Settings for input generation, rendering and operation planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Depth limit for inputs used by create mutations
    pub create_depth_limit: usize,

    /// Depth limit for inputs used by update mutations
    pub update_depth_limit: usize,

    /// Depth limit for read selections
    pub selection_depth_limit: usize,

    /// Include nullable fields while below the depth limit
    pub include_optional: bool,

    /// Build updates from `_InputToUpdate` types instead of a fresh create input
    pub use_update_inputs: bool,

    /// Seed for reproducibility (None = fork from the process-wide source)
    pub seed: Option<u64>,

    /// Instant that generated past dates are measured back from (None = now)
    pub reference_time: Option<DateTime<Utc>>,

    /// Field names with this prefix denote derived fields and are never generated
    pub reserved_prefix: String,

    /// Name of the reference-only creation strategy
    pub connect_field: String,

    /// Prefix shared by the inline creation strategies
    pub create_prefix: String,

    /// Name of the auxiliary edge-annotation field on relation inputs
    pub annotations_field: String,

    /// Prefix of identifiers synthesized for reference-only stubs
    pub placeholder_id_prefix: String,

    /// Page size used by list queries
    pub list_page_size: usize,

    /// Regex patterns of type names the planner leaves out
    pub exclude_types: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            create_depth_limit: 6,
            update_depth_limit: 7,
            selection_depth_limit: 3,
            include_optional: false,
            use_update_inputs: false,
            seed: None,
            reference_time: None,
            reserved_prefix: "_".to_string(),
            connect_field: "connect".to_string(),
            create_prefix: "create".to_string(),
            annotations_field: "annotations".to_string(),
            placeholder_id_prefix: "Dummy/".to_string(),
            list_page_size: 7,
            exclude_types: vec!["EdgeFrom".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// Default settings pinned to a seed
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the generator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.connect_field.is_empty() {
            return Err(Error::Config("connect_field must not be empty".to_string()));
        }
        if self.create_prefix.is_empty() {
            return Err(Error::Config("create_prefix must not be empty".to_string()));
        }
        if self.connect_field.starts_with(&self.create_prefix) {
            return Err(Error::Config(format!(
                "connect_field '{}' must not start with create_prefix '{}'",
                self.connect_field, self.create_prefix
            )));
        }
        if self.list_page_size == 0 {
            return Err(Error::Config("list_page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Whether a field name denotes a derived relationship
    pub fn is_reserved(&self, field_name: &str) -> bool {
        !self.reserved_prefix.is_empty() && field_name.starts_with(&self.reserved_prefix)
    }

    /// Whether a field name is an inline creation strategy
    ///
    /// Strategies are the bare prefix or the prefix followed by a type name,
    /// so `createHuman` qualifies and a field like `createdBy` does not.
    pub fn is_create_strategy(&self, field_name: &str) -> bool {
        match field_name.strip_prefix(self.create_prefix.as_str()) {
            Some(rest) => rest.chars().next().map_or(true, |c| c.is_ascii_uppercase()),
            None => false,
        }
    }
}

/// Which parts of the API surface the schema extender derives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtenderConfig {
    pub field_for_id: bool,
    pub creation_date: bool,
    pub last_update_date: bool,
    pub reverse_edges: bool,
    pub query_by_id: bool,
    pub query_list_of: bool,
    pub input_to_create_objects: bool,
    pub input_to_update_objects: bool,
    pub create_objects: bool,
    pub update_objects: bool,
    pub delete_objects: bool,
}

impl Default for ExtenderConfig {
    fn default() -> Self {
        Self {
            field_for_id: true,
            creation_date: true,
            last_update_date: true,
            reverse_edges: true,
            query_by_id: true,
            query_list_of: true,
            input_to_create_objects: true,
            input_to_update_objects: true,
            create_objects: true,
            update_objects: true,
            delete_objects: true,
        }
    }
}

impl ExtenderConfig {
    /// Only the input types the generator needs, nothing else
    pub fn inputs_only() -> Self {
        Self {
            field_for_id: false,
            creation_date: false,
            last_update_date: false,
            reverse_edges: false,
            query_by_id: false,
            query_list_of: false,
            input_to_create_objects: true,
            input_to_update_objects: false,
            create_objects: false,
            update_objects: false,
            delete_objects: false,
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth_limits() {
        let config = GeneratorConfig::default();
        assert_eq!(config.create_depth_limit, 6);
        assert_eq!(config.update_depth_limit, 7);
        assert_eq!(config.selection_depth_limit, 3);
        assert!(!config.include_optional);
        assert!(!config.use_update_inputs);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 42, "include_optional": true}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.include_optional);
        assert_eq!(config.connect_field, "connect");
        assert_eq!(config.exclude_types, vec!["EdgeFrom".to_string()]);
    }

    #[test]
    fn test_reserved_prefix() {
        let config = GeneratorConfig::default();
        assert!(config.is_reserved("_creationDate"));
        assert!(!config.is_reserved("name"));

        let no_prefix = GeneratorConfig {
            reserved_prefix: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(!no_prefix.is_reserved("_creationDate"));
    }

    #[test]
    fn test_validate_rejects_connect_with_create_prefix() {
        let config = GeneratorConfig {
            connect_field: "createRef".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_create_strategy_names() {
        let config = GeneratorConfig::default();
        assert!(config.is_create_strategy("create"));
        assert!(config.is_create_strategy("createHuman"));
        assert!(!config.is_create_strategy("createdBy"));
        assert!(!config.is_create_strategy("creator"));
        assert!(!config.is_create_strategy("connect"));
    }

    #[test]
    fn test_extender_defaults_enable_everything() {
        let config: ExtenderConfig = serde_json::from_str(r#"{"reverse_edges": false}"#).unwrap();
        assert!(!config.reverse_edges);
        assert!(config.input_to_create_objects);
        assert!(config.delete_objects);
    }
}
