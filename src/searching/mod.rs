//! Search algorithms.
//!
//! Searches take their target from [`RunOptions`](crate::registry::RunOptions)
//! and answer with a [`SearchOutcome`](crate::registry::SearchOutcome).

pub mod binary_search;
pub mod linear_search;

use crate::data::Element;
use crate::registry::{AlgorithmRunner, RunOptions};
use crate::trace::RunContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CATEGORY: &str = "searching";

/// Check a search runner against `Iterator::position` on sorted random data.
///
/// With `lowest_index`, the reported index must be the first match.
pub(crate) fn verify_search(
    runner: &dyn AlgorithmRunner,
    lowest_index: bool,
) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0x5eed_5ea2);

    for size in [1, 2, 9, 100, 513] {
        let mut data: Vec<Element> = (0..size)
            .map(|_| Element::Int(rng.random_range(0..200)))
            .collect();
        data.sort();

        // Targets both inside and outside the value range
        for target in [-1, 0, 57, 100, 199, 250] {
            let target = Element::Int(target);
            let mut ctx = RunContext::counting();
            let outcome = runner
                .execute(&data, &RunOptions::with_target(target.clone()), &mut ctx)
                .map_err(|e| format!("'{}' failed: {}", runner.id(), e))?;
            let outcome = outcome
                .as_search()
                .ok_or_else(|| format!("'{}' did not return a search outcome", runner.id()))?
                .clone();

            let expected = data.iter().position(|e| *e == target);
            match (expected, outcome.found) {
                (None, false) if outcome.index == -1 && outcome.value.is_none() => {}
                (Some(first), true) => {
                    let idx = outcome.index as usize;
                    if data.get(idx) != Some(&target) || outcome.value.as_ref() != Some(&target) {
                        return Err(format!(
                            "'{}' reported index {} for target {}, which holds {:?}",
                            runner.id(),
                            idx,
                            target,
                            data.get(idx)
                        ));
                    }
                    if lowest_index && idx != first {
                        return Err(format!(
                            "'{}' returned index {} instead of first match {}",
                            runner.id(),
                            idx,
                            first
                        ));
                    }
                }
                _ => {
                    return Err(format!(
                        "Variant '{}' failed verification for target {}: expected {:?}, got {:?}",
                        runner.id(),
                        target,
                        expected,
                        outcome
                    ))
                }
            }
        }
    }

    Ok(())
}
