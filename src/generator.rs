//! Synthetic input generation for benchmarking.

use crate::config::DEFAULT_MAX_INPUT_SIZE;
use crate::data::Dataset;
use crate::error::{LabError, Result};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataShape {
    /// Independent uniform samples
    Random,
    Sorted,
    #[serde(alias = "reverse_sorted")]
    Reverse,
    /// Ascending, then a few random pairwise swaps
    NearlySorted,
    /// Random alphanumeric strings
    Strings,
}

impl DataShape {
    pub const ALL: [DataShape; 5] = [
        DataShape::Random,
        DataShape::Sorted,
        DataShape::Reverse,
        DataShape::NearlySorted,
        DataShape::Strings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Random => "random",
            DataShape::Sorted => "sorted",
            DataShape::Reverse => "reverse",
            DataShape::NearlySorted => "nearly_sorted",
            DataShape::Strings => "strings",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataShape {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(DataShape::Random),
            "sorted" => Ok(DataShape::Sorted),
            "reverse" | "reverse_sorted" => Ok(DataShape::Reverse),
            "nearly_sorted" => Ok(DataShape::NearlySorted),
            "strings" => Ok(DataShape::Strings),
            other => Err(LabError::invalid(format!(
                "Data type '{}' is not supported (expected one of: random, sorted, reverse, nearly_sorted, strings)",
                other
            ))),
        }
    }
}

/// Longest string `strings` will generate.
pub const MAX_STRING_LENGTH: usize = 1_000;

/// `nearly_sorted` accepts at most this many swaps per element.
pub const MAX_SWAPS_PER_ELEMENT: usize = 10;

/// Shape-specific generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub min_val: i64,
    pub max_val: i64,
    /// Pairwise swaps applied by `nearly_sorted`
    pub swaps: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
    /// Largest accepted `size`; the engine's `max_input_size`
    pub max_size: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            min_val: 1,
            max_val: 1000,
            swaps: 10,
            min_length: 3,
            max_length: 10,
            seed: None,
            max_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// Generate `size` values of the given shape.
///
/// Every parameter is bounded before any work starts: `size` by
/// `options.max_size`, `swaps` by [`MAX_SWAPS_PER_ELEMENT`] times `size`, and
/// `max_length` by [`MAX_STRING_LENGTH`].
pub fn generate(shape: DataShape, size: usize, options: &GenerateOptions) -> Result<Dataset> {
    if !(1..=options.max_size).contains(&size) {
        return Err(LabError::invalid(format!(
            "Size must be between 1 and {}",
            options.max_size
        )));
    }
    if options.min_val > options.max_val {
        return Err(LabError::invalid("min_val must not exceed max_val"));
    }
    let max_swaps = size.saturating_mul(MAX_SWAPS_PER_ELEMENT);
    if options.swaps > max_swaps {
        return Err(LabError::invalid(format!(
            "swaps must not exceed {} for size {}",
            max_swaps, size
        )));
    }
    if options.min_length > options.max_length {
        return Err(LabError::invalid("min_length must not exceed max_length"));
    }
    if options.max_length > MAX_STRING_LENGTH {
        return Err(LabError::invalid(format!(
            "max_length must not exceed {}",
            MAX_STRING_LENGTH
        )));
    }

    let data = match options.seed {
        Some(seed) => generate_with(&mut StdRng::seed_from_u64(seed), shape, size, options),
        None => generate_with(&mut rand::rng(), shape, size, options),
    };
    Ok(data)
}

fn generate_with<R: Rng>(
    rng: &mut R,
    shape: DataShape,
    size: usize,
    options: &GenerateOptions,
) -> Dataset {
    match shape {
        DataShape::Random => Dataset::integers(random_values(rng, size, options)),
        DataShape::Sorted => Dataset::integers(sorted_values(rng, size, options)),
        DataShape::Reverse => {
            let mut values = sorted_values(rng, size, options);
            values.reverse();
            Dataset::integers(values)
        }
        DataShape::NearlySorted => {
            let mut values = sorted_values(rng, size, options);
            for _ in 0..options.swaps {
                let i = rng.random_range(0..size);
                let j = rng.random_range(0..size);
                values.swap(i, j);
            }
            Dataset::integers(values)
        }
        DataShape::Strings => {
            let strings: Vec<String> = (0..size)
                .map(|_| {
                    let len = rng.random_range(options.min_length..=options.max_length);
                    (&mut *rng)
                        .sample_iter(Alphanumeric)
                        .take(len)
                        .map(char::from)
                        .collect()
                })
                .collect();
            Dataset::from(strings)
        }
    }
}

fn random_values<R: Rng>(rng: &mut R, size: usize, options: &GenerateOptions) -> Vec<i64> {
    (0..size)
        .map(|_| rng.random_range(options.min_val..=options.max_val))
        .collect()
}

fn sorted_values<R: Rng>(rng: &mut R, size: usize, options: &GenerateOptions) -> Vec<i64> {
    let mut values = random_values(rng, size, options);
    values.sort_unstable();
    values
}
