//! # Merge Sort
//!
//! Splits the sequence in halves, sorts each half recursively and merges the
//! two sorted runs. Ties are resolved in favour of the left run, so the sort
//! is stable.

mod code;
#[cfg(test)]
mod test;

pub use code::merge_sort;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct MergeSortRunner;

impl AlgorithmRunner for MergeSortRunner {
    fn id(&self) -> &'static str {
        "merge_sort"
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn description(&self) -> &'static str {
        "Sorts a list by splitting it in halves, sorting each half recursively and merging the results"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], _options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        Ok(Outcome::Sorted(merge_sort(data, ctx)))
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_sort(self)
    }
}
