//! # Linear Search
//!
//! Scans the sequence front to back and stops at the first match, so the
//! reported index is always the lowest one holding the target.

mod code;
#[cfg(test)]
mod test;

pub use code::linear_search;

use crate::data::Element;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::RunContext;

pub struct LinearSearchRunner;

impl AlgorithmRunner for LinearSearchRunner {
    fn id(&self) -> &'static str {
        "linear_search"
    }

    fn name(&self) -> &'static str {
        "Linear Search"
    }

    fn description(&self) -> &'static str {
        "Finds an element by visiting the list sequentially"
    }

    fn category(&self) -> &'static str {
        super::CATEGORY
    }

    fn execute(&self, data: &[Element], options: &RunOptions, ctx: &mut RunContext) -> Result<Outcome> {
        let target = options.require_target(data.first().map(Element::kind))?;
        Ok(Outcome::Search(linear_search(data, target, ctx)))
    }

    fn verify(&self) -> std::result::Result<(), String> {
        super::verify_search(self, true)
    }
}
