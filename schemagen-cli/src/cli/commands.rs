// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for schemagen

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// schemagen CLI - synthetic GraphQL inputs and queries from a schema
#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "schemagen - Schema-driven GraphQL input and query generator")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Schema source shared by every command that reads one
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// SDL schema file
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Derive the API surface (inputs, queries, mutations) before use
    #[arg(short, long)]
    pub extend: bool,

    /// Extender configuration file (JSON), implies --extend
    #[arg(long)]
    pub extender_config: Option<PathBuf>,
}

/// Generator settings shared by the generating commands
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Generator configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Include optional fields below the depth limit
    #[arg(long)]
    pub include_optional: bool,

    /// Build updates from the schema's update input types
    #[arg(long)]
    pub update_inputs: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// List the object types of a schema
    Types {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Generate a create input for a type
    Generate {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Object type to generate an input for
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Depth limit (defaults to the configured create depth limit)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Generate the update input instead
        #[arg(long)]
        update: bool,

        /// Output format
        #[arg(short, long, default_value = "graphql")]
        format: OutputFormat,
    },

    /// Render the selection set of a type
    Selection {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Object type to select from
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Depth limit
        #[arg(short, long, default_value_t = 3)]
        depth: usize,
    },

    /// Generate a create input and show the entity it flattens to
    Flatten {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Object type to generate an input for
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Depth limit (defaults to the configured create depth limit)
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Print create/get/update/list operations for testable types
    Plan {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Only plan this type
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "graphql")]
        format: OutputFormat,
    },

    /// Print the extended API schema as SDL
    Extend {
        /// SDL schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Extender configuration file (JSON)
        #[arg(long)]
        extender_config: Option<PathBuf>,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Graphql,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "graphql" | "gql" => Ok(OutputFormat::Graphql),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
