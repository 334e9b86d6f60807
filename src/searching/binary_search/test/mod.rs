use super::*;
use crate::error::LabError;
use crate::sorting::ints;
use crate::trace::Step;

const SORTED: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

#[test]
fn test_binary_search_found() {
    let mut ctx = RunContext::default();
    let outcome = binary_search(&ints(&SORTED), &Element::Int(25), &mut ctx).unwrap();
    assert!(outcome.found);
    assert_eq!(outcome.index, 3);
    assert_eq!(outcome.value, Some(Element::Int(25)));
    assert_eq!(ctx.comparisons(), 1);
}

#[test]
fn test_binary_search_not_found() {
    let mut ctx = RunContext::default();
    let outcome = binary_search(&ints(&SORTED), &Element::Int(100), &mut ctx).unwrap();
    assert!(!outcome.found);
    assert_eq!(outcome.index, -1);
    assert_eq!(outcome.value, None);
}

#[test]
fn test_binary_search_below_range() {
    let mut ctx = RunContext::default();
    let outcome = binary_search(&ints(&SORTED), &Element::Int(1), &mut ctx).unwrap();
    assert!(!outcome.found);
}

#[test]
fn test_binary_search_probe_bounds() {
    let mut ctx = RunContext::default();
    binary_search(&ints(&SORTED), &Element::Int(64), &mut ctx).unwrap();
    let bounds: Vec<(usize, usize, usize)> = ctx
        .steps()
        .iter()
        .filter_map(|s| match s {
            Step::Probe { left, right, mid, .. } => Some((*left, *right, *mid)),
            _ => None,
        })
        .collect();
    assert_eq!(bounds, vec![(0, 6, 3), (4, 6, 5)]);
}

#[test]
fn test_binary_search_rejects_unsorted_before_comparing() {
    let mut ctx = RunContext::default();
    let err = binary_search(&ints(&[64, 34, 25, 12, 22, 11, 90]), &Element::Int(25), &mut ctx)
        .unwrap_err();
    assert!(matches!(err, LabError::PreconditionFailed(_)));
    assert_eq!(ctx.comparisons(), 0);
    assert_eq!(ctx.steps_count(), 0);
}

#[test]
fn test_binary_search_strings() {
    let data: Vec<Element> = ["ant", "bee", "cat", "dog"].into_iter().map(Element::from).collect();
    let mut ctx = RunContext::default();
    let outcome = binary_search(&data, &Element::from("dog"), &mut ctx).unwrap();
    assert_eq!(outcome.index, 3);
}

#[test]
fn test_runner_requires_target() {
    let mut ctx = RunContext::default();
    let err = BinarySearchRunner
        .execute(&ints(&SORTED), &RunOptions::default(), &mut ctx)
        .unwrap_err();
    assert!(matches!(err, LabError::InvalidArgument(_)));
}
