use crate::data::Element;
use crate::trace::{RunContext, Step};

/// Sort a copy of `data` with quick sort.
///
/// Ranges are visited in the same order as the recursive formulation
/// (`[low, p - 1]` fully before `[p + 1, high]`), so the step log matches it.
pub fn quick_sort(data: &[Element], ctx: &mut RunContext) -> Vec<Element> {
    let mut arr = data.to_vec();
    if arr.len() < 2 {
        return arr;
    }

    let mut ranges = vec![(0, arr.len() - 1)];
    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(&mut arr, low, high, ctx);

        // LIFO: push the right range first so the left one is handled next.
        // Ranges with fewer than two elements are already in place.
        if pivot + 1 < high {
            ranges.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            ranges.push((low, pivot - 1));
        }
    }

    arr
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`.
///
/// For ranges of three or more, the median of the first, middle and last
/// elements is swapped into `high` first, so sorted and reversed input split
/// evenly instead of degrading to quadratic time.
fn partition(arr: &mut [Element], low: usize, high: usize, ctx: &mut RunContext) -> usize {
    if high - low >= 2 {
        let median = median_of_three(arr, low, low + (high - low) / 2, high, ctx);
        if median != high {
            arr.swap(median, high);
            ctx.swap();
            ctx.record(|| Step::Swap {
                indices: [median, high],
                array: arr.to_vec(),
            });
        }
    }

    let mut store = low;

    // The pivot stays at `high` for the whole loop since `store <= j < high`
    for j in low..high {
        ctx.compare();
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            ctx.swap();
            ctx.record(|| Step::Swap {
                indices: [store, j],
                array: arr.to_vec(),
            });
            store += 1;
        }
    }

    arr.swap(store, high);
    ctx.swap();
    ctx.record(|| Step::Pivot {
        pivot_index: store,
        array: arr.to_vec(),
    });

    store
}

/// Index among `a`, `b` and `c` holding the median value.
fn median_of_three(arr: &[Element], a: usize, b: usize, c: usize, ctx: &mut RunContext) -> usize {
    ctx.compare();
    if arr[a] <= arr[b] {
        ctx.compare();
        if arr[b] <= arr[c] {
            return b;
        }
        ctx.compare();
        if arr[a] <= arr[c] {
            c
        } else {
            a
        }
    } else {
        ctx.compare();
        if arr[a] <= arr[c] {
            return a;
        }
        ctx.compare();
        if arr[b] <= arr[c] {
            c
        } else {
            b
        }
    }
}
