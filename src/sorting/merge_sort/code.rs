use crate::data::Element;
use crate::trace::{RunContext, Step};

/// Sort a copy of `data` with top-down merge sort.
///
/// Logs one [`Step::Merge`] per merge with both input runs and the output.
/// Recursion depth is `log2(n)`.
pub fn merge_sort(data: &[Element], ctx: &mut RunContext) -> Vec<Element> {
    sort_run(data.to_vec(), ctx)
}

fn sort_run(mut run: Vec<Element>, ctx: &mut RunContext) -> Vec<Element> {
    if run.len() <= 1 {
        return run;
    }

    let right = run.split_off(run.len() / 2);
    let left = sort_run(run, ctx);
    let right = sort_run(right, ctx);

    merge(left, right, ctx)
}

fn merge(left: Vec<Element>, right: Vec<Element>, ctx: &mut RunContext) -> Vec<Element> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        ctx.compare();
        // `<=` keeps equal elements in their original order
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    let merged = &result;
    ctx.record(move || Step::Merge {
        left,
        right,
        result: merged.clone(),
    });

    result
}
