use crate::data::{is_non_decreasing, Element};
use crate::error::{LabError, Result};
use crate::registry::SearchOutcome;
use crate::trace::{RunContext, Step};
use std::cmp::Ordering;

/// Search sorted `data` for `target`, logging one [`Step::Probe`] per probe.
///
/// Fails with [`LabError::PreconditionFailed`] when `data` is not in
/// non-decreasing order. The check runs before any comparison is counted.
pub fn binary_search(data: &[Element], target: &Element, ctx: &mut RunContext) -> Result<SearchOutcome> {
    if !is_non_decreasing(data) {
        return Err(LabError::PreconditionFailed(
            "The list must be sorted to use binary search".to_string(),
        ));
    }

    if data.is_empty() {
        return Ok(SearchOutcome::not_found());
    }

    let (mut left, mut right) = (0usize, data.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        let value = &data[mid];

        ctx.compare();
        ctx.record(|| Step::Probe {
            left,
            right,
            mid,
            value: value.clone(),
            target: target.clone(),
        });

        match value.cmp(target) {
            Ordering::Equal => return Ok(SearchOutcome::found(mid, value.clone())),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }

    Ok(SearchOutcome::not_found())
}
