// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Synthetic input generation
//!
//! - [`random`]: seedable random source and the process-wide seed
//! - [`scalars`]: per-kind scalar value generators
//! - [`value`]: the generated value tree
//! - [`input`]: schema-driven create/update input generator

pub mod input;
pub mod random;
pub mod scalars;
pub mod value;

pub use input::InputGenerator;
pub use random::{set_global_seed, RandomSource};
pub use scalars::ScalarKind;
pub use value::GeneratedValue;
