use crate::data::Element;
use crate::registry::SearchOutcome;
use crate::trace::{RunContext, Step};

/// Find the first occurrence of `target`, logging one [`Step::Compare`] per visit.
pub fn linear_search(data: &[Element], target: &Element, ctx: &mut RunContext) -> SearchOutcome {
    for (index, item) in data.iter().enumerate() {
        ctx.compare();
        ctx.record(|| Step::Compare {
            index,
            value: item.clone(),
            target: target.clone(),
        });

        if item == target {
            return SearchOutcome::found(index, item.clone());
        }
    }

    SearchOutcome::not_found()
}
