use crate::data::Element;
use crate::trace::{RunContext, Step};

/// Sort a copy of `data` with bubble sort.
///
/// Logs one [`Step::Swap`] per exchange with a snapshot taken after it.
pub fn bubble_sort(data: &[Element], ctx: &mut RunContext) -> Vec<Element> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            ctx.compare();
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                ctx.swap();
                swapped = true;
                ctx.record(|| Step::Swap {
                    indices: [j, j + 1],
                    array: arr.clone(),
                });
            }
        }

        if !swapped {
            break;
        }
    }

    arr
}
