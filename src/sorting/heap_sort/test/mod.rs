use super::*;
use crate::sorting::ints;
use crate::trace::Step;

#[test]
fn test_heap_sort_basic() {
    let mut ctx = RunContext::default();
    let result = heap_sort(&ints(&[64, 34, 25, 12, 22, 11, 90]), &mut ctx);
    assert_eq!(result, ints(&[11, 12, 22, 25, 34, 64, 90]));
    assert!(ctx.comparisons() > 0);
}

#[test]
fn test_heap_sort_step_kinds() {
    let mut ctx = RunContext::default();
    heap_sort(&ints(&[1, 2, 3]), &mut ctx);
    let actions: Vec<&str> = ctx.steps().iter().map(Step::action).collect();
    // Build: 3 rises to the root; then two extractions, the first re-heapifies
    assert_eq!(actions, vec!["heapify", "swap", "heapify", "swap"]);
    assert_eq!(ctx.swaps(), 4);
}

#[test]
fn test_heap_sort_two_elements() {
    let mut ctx = RunContext::default();
    assert_eq!(heap_sort(&ints(&[2, 1]), &mut ctx), ints(&[1, 2]));
    assert_eq!(ctx.comparisons(), 1);
}

#[test]
fn test_heap_sort_strings() {
    let input = vec![Element::from("pear"), Element::from("apple"), Element::from("fig")];
    let mut ctx = RunContext::default();
    let result = heap_sort(&input, &mut ctx);
    assert_eq!(
        result,
        vec![Element::from("apple"), Element::from("fig"), Element::from("pear")]
    );
}
