//! # Quick Sort
//!
//! Lomuto partitioning around the last element of each range. Before each
//! partition the median of the first, middle and last elements is swapped
//! into that last slot, so sorted and reversed input stay O(n log n).
//! Pending ranges are kept on an explicit stack instead of the call stack,
//! which bounds stack use even when the split is lopsided.

mod code;
#[cfg(test)]
mod test;

pub use code::quick_sort;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct QuickSortRunner;

impl AlgorithmRunner for QuickSortRunner {
    fn id(&self) -> &'static str {
        "quick_sort"
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn description(&self) -> &'static str {
        "Sorts a list by partitioning it around a pivot and sorting each partition"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], _options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        Ok(Outcome::Sorted(quick_sort(data, ctx)))
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_sort(self)
    }
}
