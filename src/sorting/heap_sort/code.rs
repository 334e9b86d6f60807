use crate::data::Element;
use crate::trace::{RunContext, Step};

/// Sort a copy of `data` with heap sort.
///
/// Root extractions are logged as [`Step::Swap`], heap-restoring exchanges
/// as [`Step::Heapify`].
pub fn heap_sort(data: &[Element], ctx: &mut RunContext) -> Vec<Element> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut arr, n, root, ctx);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        ctx.swap();
        ctx.record(|| Step::Swap {
            indices: [0, end],
            array: arr.clone(),
        });
        sift_down(&mut arr, end, 0, ctx);
    }

    arr
}

/// Restore the max-heap property for the subtree at `root` within `arr[..len]`.
fn sift_down(arr: &mut [Element], len: usize, mut root: usize, ctx: &mut RunContext) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len {
            ctx.compare();
            if arr[left] > arr[largest] {
                largest = left;
            }
        }

        if right < len {
            ctx.compare();
            if arr[right] > arr[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        arr.swap(root, largest);
        ctx.swap();
        ctx.record(|| Step::Heapify {
            indices: [root, largest],
            array: arr.to_vec(),
        });
        root = largest;
    }
}
