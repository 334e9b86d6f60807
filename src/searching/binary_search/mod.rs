//! # Binary Search
//!
//! Halves the search interval `[left, right]` around `mid = (left + right) / 2`
//! until the target is found or the interval is empty. Input must be in
//! non-decreasing order; unsorted input is rejected before the first probe.

mod code;
#[cfg(test)]
mod test;

pub use code::binary_search;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct BinarySearchRunner;

impl AlgorithmRunner for BinarySearchRunner {
    fn id(&self) -> &'static str {
        "binary_search"
    }

    fn name(&self) -> &'static str {
        "Binary Search"
    }

    fn description(&self) -> &'static str {
        "Finds an element in a sorted list by repeatedly halving the search interval"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        let target = options.require_target(data.first().map(Element::kind))?;
        binary_search(data, target, ctx).map(Outcome::Search)
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_search(self, false)
    }
}
