use super::*;
use crate::sorting::ints;
use crate::trace::Step;

#[test]
fn test_quick_sort_basic() {
    let mut ctx = RunContext::default();
    let result = quick_sort(&ints(&[64, 34, 25, 12, 22, 11, 90]), &mut ctx);
    assert_eq!(result, ints(&[11, 12, 22, 25, 34, 64, 90]));
    assert!(ctx.comparisons() > 0);
}

#[test]
fn test_quick_sort_pivot_step() {
    let mut ctx = RunContext::default();
    quick_sort(&ints(&[3, 1, 2]), &mut ctx);
    // 2 is already the median of three, so it stays last: swap 1 into slot 0,
    // then place the pivot at 1
    assert_eq!(
        ctx.steps(),
        &[
            Step::Swap {
                indices: [0, 1],
                array: ints(&[1, 3, 2]),
            },
            Step::Pivot {
                pivot_index: 1,
                array: ints(&[1, 2, 3]),
            },
        ]
    );
    // Three to pick the median, two while partitioning
    assert_eq!(ctx.comparisons(), 5);
    assert_eq!(ctx.swaps(), 2);
}

#[test]
fn test_quick_sort_already_sorted() {
    let mut ctx = RunContext::default();
    let result = quick_sort(&ints(&[1, 2, 3, 4, 5]), &mut ctx);
    assert_eq!(result, ints(&[1, 2, 3, 4, 5]));
    // Median 3 moves to the end, then splits the range into two pairs
    assert_eq!(
        ctx.steps().first(),
        Some(&Step::Swap {
            indices: [2, 4],
            array: ints(&[1, 2, 5, 4, 3]),
        })
    );
    assert_eq!(ctx.comparisons(), 2 + 4 + 1 + 1);
}

#[test]
fn test_quick_sort_median_pivot_on_reversed_input() {
    let mut ctx = RunContext::default();
    let result = quick_sort(&ints(&[5, 4, 3, 2, 1]), &mut ctx);
    assert_eq!(result, ints(&[1, 2, 3, 4, 5]));
    let first_pivot = ctx.steps().iter().find_map(|s| match s {
        Step::Pivot { pivot_index, .. } => Some(*pivot_index),
        _ => None,
    });
    assert_eq!(first_pivot, Some(2));
}

#[test]
fn test_quick_sort_large_sorted_input() {
    let input: Vec<i64> = (0..50_000).collect();
    let mut ctx = RunContext::counting();
    let result = quick_sort(&ints(&input), &mut ctx);
    assert_eq!(result, ints(&input));
    // Balanced splits: about n * log2(n), far below n^2 / 2
    assert!(ctx.comparisons() < 2_000_000);
}
