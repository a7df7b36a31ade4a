// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for schemagen

use thiserror::Error;

/// Result type alias for schemagen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schemagen operations
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced type name is not part of the schema
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// A referenced field is not declared on the type
    #[error("Unknown field '{field}' on type {type_name}")]
    UnknownField { type_name: String, field: String },

    /// An object type was required but the name resolves to something else
    #[error("Type {0} is not an object, input or interface type")]
    NotAnObject(String),

    /// An enum type was required but the name resolves to something else
    #[error("Type {0} is not an enum type")]
    NotAnEnum(String),

    /// Enum declared without any values
    #[error("Enum {0} has no values to choose from")]
    EmptyEnum(String),

    /// Relation input offers nothing to construct the related object with
    #[error("Relation input {0} has no creation strategy")]
    NoCreationStrategy(String),

    /// SDL parse errors
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid type filter pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true when the error means the schema and the request disagree
    pub fn is_schema_inconsistency(&self) -> bool {
        matches!(
            self,
            Error::UnknownType(_)
                | Error::UnknownField { .. }
                | Error::NotAnObject(_)
                | Error::NotAnEnum(_)
                | Error::EmptyEnum(_)
                | Error::NoCreationStrategy(_)
        )
    }
}
