// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for schemagen
//!
//! Loads a schema, optionally derives its API surface, and prints generated
//! inputs, selections, flattened entities or whole operation plans.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_extend, handle_flatten, handle_generate, handle_plan, handle_selection, handle_types, handle_version,
};
