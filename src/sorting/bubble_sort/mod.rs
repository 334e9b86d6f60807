//! # Bubble Sort
//!
//! Repeatedly sweeps the sequence comparing adjacent pairs and swapping the
//! ones that are out of order. A sweep without any swap ends the sort early,
//! which makes already-sorted input an O(n) best case.

mod code;
#[cfg(test)]
mod test;

pub use code::bubble_sort;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct BubbleSortRunner;

impl AlgorithmRunner for BubbleSortRunner {
    fn id(&self) -> &'static str {
        "bubble_sort"
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn description(&self) -> &'static str {
        "Sorts a list by comparing adjacent elements and swapping them when they are out of order"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], _options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        Ok(Outcome::Sorted(bubble_sort(data, ctx)))
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_sort(self)
    }
}
