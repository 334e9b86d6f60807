use super::*;
use crate::sorting::ints;
use crate::trace::Step;

#[test]
fn test_merge_sort_basic() {
    let mut ctx = RunContext::default();
    let result = merge_sort(&ints(&[64, 34, 25, 12, 22, 11, 90]), &mut ctx);
    assert_eq!(result, ints(&[11, 12, 22, 25, 34, 64, 90]));
    assert!(ctx.comparisons() > 0);
    assert_eq!(ctx.swaps(), 0);
}

#[test]
fn test_merge_sort_one_step_per_merge() {
    let mut ctx = RunContext::default();
    merge_sort(&ints(&[4, 3, 2, 1]), &mut ctx);
    // [4] + [3], [2] + [1], then [3, 4] + [1, 2]
    assert_eq!(ctx.steps_count(), 3);
    assert_eq!(
        ctx.steps().last(),
        Some(&Step::Merge {
            left: ints(&[3, 4]),
            right: ints(&[1, 2]),
            result: ints(&[1, 2, 3, 4]),
        })
    );
}

#[test]
fn test_merge_sort_is_stable() {
    // 1 and 1.0 compare equal; the integer comes first in the input
    let input = vec![
        Element::Int(2),
        Element::Int(1),
        Element::Float(1.0),
        Element::Int(0),
    ];
    let mut ctx = RunContext::default();
    let result = merge_sort(&input, &mut ctx);
    assert!(matches!(result[1], Element::Int(1)));
    assert!(matches!(result[2], Element::Float(_)));
}

#[test]
fn test_merge_sort_single_element() {
    let mut ctx = RunContext::default();
    assert_eq!(merge_sort(&ints(&[5]), &mut ctx), ints(&[5]));
    assert_eq!(ctx.steps_count(), 0);
}
