// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Random source
//
// Every generator owns its own source. The process-wide source only hands out
// forks, so concurrent generators never share mutable state while a single
// `set_global_seed` still makes a whole run reproducible.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::ops::RangeInclusive;

static GLOBAL_SOURCE: Lazy<Mutex<fastrand::Rng>> = Lazy::new(|| Mutex::new(fastrand::Rng::new()));

/// Reseed the process-wide source that [`RandomSource::from_global`] forks from
pub fn set_global_seed(seed: u64) {
    log::debug!("Reseeding global random source with {}", seed);
    GLOBAL_SOURCE.lock().seed(seed);
}

/// Seedable pseudo-random source owned by a single generator
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: fastrand::Rng,
}

impl RandomSource {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Fork an independent source from the process-wide one
    pub fn from_global() -> Self {
        Self {
            rng: GLOBAL_SOURCE.lock().fork(),
        }
    }

    /// Source for an optional seed: seeded when given, forked from global otherwise
    pub fn from_seed_or_global(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_global(),
        }
    }

    /// Uniform index below `len`, None when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.usize(..len))
        }
    }

    /// Uniform choice from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }

    pub fn u32_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.u32(range)
    }

    pub fn i64_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.i64(range)
    }

    /// Uniform float in `[0, 1)`
    pub fn f64(&mut self) -> f64 {
        self.rng.f64()
    }

    pub fn bool(&mut self) -> bool {
        self.rng.bool()
    }

    pub fn u64(&mut self) -> u64 {
        self.rng.u64(..)
    }

    pub fn bytes16(&mut self) -> [u8; 16] {
        self.rng.u128(..).to_le_bytes()
    }
}
