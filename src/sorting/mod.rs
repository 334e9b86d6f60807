//! Comparison sorts.
//!
//! Each sort copies its input, reorders the copy and returns it, counting
//! comparisons and swaps into the run context as it goes.

pub mod bubble_sort;
pub mod heap_sort;
pub mod merge_sort;
pub mod quick_sort;

use crate::data::Element;
use crate::registry::{AlgorithmRunner, RunOptions};
use crate::trace::RunContext;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CATEGORY: &str = "sorting";

/// Check a sort runner against `slice::sort` on a fixed set of inputs.
pub(crate) fn verify_sort(runner: &dyn AlgorithmRunner) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0x5eed_5047);

    let mut cases: Vec<Vec<Element>> = vec![Vec::new(), vec![Element::Int(5)]];
    for size in [2, 7, 64, 257] {
        // Narrow range to force duplicates
        let random: Vec<Element> = (0..size)
            .map(|_| Element::Int(rng.random_range(-50..=50)))
            .collect();
        let mut sorted = random.clone();
        sorted.sort();
        let reversed: Vec<Element> = sorted.iter().rev().cloned().collect();
        cases.push(random);
        cases.push(sorted);
        cases.push(reversed);
    }
    cases.push(
        (0..33)
            .map(|_| Element::Float(rng.random_range(-1.0..1.0)))
            .collect(),
    );
    cases.push(
        (0..33)
            .map(|_| {
                let len = rng.random_range(1..=6);
                Element::Text((&mut rng).sample_iter(Alphanumeric).take(len).map(char::from).collect())
            })
            .collect(),
    );

    for input in &cases {
        let mut ctx = RunContext::counting();
        let outcome = runner
            .execute(input, &RunOptions::default(), &mut ctx)
            .map_err(|e| format!("'{}' failed on input of size {}: {}", runner.id(), input.len(), e))?;
        let got = outcome
            .as_sorted()
            .ok_or_else(|| format!("'{}' did not return a sequence", runner.id()))?;

        let mut expected = input.clone();
        expected.sort();
        if got != expected.as_slice() {
            return Err(format!(
                "Variant '{}' failed verification on input {:?}: got {:?}",
                runner.id(),
                input,
                got
            ));
        }
        if input.len() >= 2 && ctx.comparisons() == 0 {
            return Err(format!(
                "'{}' reported no comparisons for input of size {}",
                runner.id(),
                input.len()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn ints(values: &[i64]) -> Vec<Element> {
    values.iter().copied().map(Element::Int).collect()
}
