//! # Heap Sort
//!
//! Builds a max-heap bottom-up, then repeatedly moves the root behind the
//! unsorted region and restores the heap property.

mod code;
#[cfg(test)]
mod test;

pub use code::heap_sort;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct HeapSortRunner;

impl AlgorithmRunner for HeapSortRunner {
    fn id(&self) -> &'static str {
        "heap_sort"
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn description(&self) -> &'static str {
        "Sorts a list using a binary max-heap"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], _options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        Ok(Outcome::Sorted(heap_sort(data, ctx)))
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_sort(self)
    }
}
