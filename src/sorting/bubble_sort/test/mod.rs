use super::*;
use crate::sorting::ints;
use crate::trace::Step;

#[test]
fn test_bubble_sort_basic() {
    let mut ctx = RunContext::default();
    let result = bubble_sort(&ints(&[64, 34, 25, 12, 22, 11, 90]), &mut ctx);
    assert_eq!(result, ints(&[11, 12, 22, 25, 34, 64, 90]));
    assert!(ctx.comparisons() > 0);
    assert_eq!(ctx.swaps(), ctx.steps_count());
}

#[test]
fn test_bubble_sort_sorted_input_single_pass() {
    let mut ctx = RunContext::default();
    let result = bubble_sort(&ints(&[1, 2, 3, 4, 5]), &mut ctx);
    assert_eq!(result, ints(&[1, 2, 3, 4, 5]));
    // One sweep of n - 1 comparisons, then early exit
    assert_eq!(ctx.comparisons(), 4);
    assert_eq!(ctx.swaps(), 0);
    assert!(ctx.steps().is_empty());
}

#[test]
fn test_bubble_sort_swap_snapshot() {
    let mut ctx = RunContext::default();
    bubble_sort(&ints(&[2, 1]), &mut ctx);
    assert_eq!(
        ctx.steps(),
        &[Step::Swap {
            indices: [0, 1],
            array: ints(&[1, 2]),
        }]
    );
}

#[test]
fn test_bubble_sort_empty_and_single() {
    let mut ctx = RunContext::default();
    assert!(bubble_sort(&[], &mut ctx).is_empty());
    assert_eq!(bubble_sort(&ints(&[5]), &mut ctx), ints(&[5]));
    assert_eq!(ctx.comparisons(), 0);
}

#[test]
fn test_bubble_sort_leaves_input_untouched() {
    let input = ints(&[3, 1, 2]);
    let mut ctx = RunContext::default();
    let _ = bubble_sort(&input, &mut ctx);
    assert_eq!(input, ints(&[3, 1, 2]));
}
