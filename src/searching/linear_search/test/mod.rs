use super::*;
use crate::error::LabError;
use crate::sorting::ints;
use crate::trace::Step;

#[test]
fn test_linear_search_found() {
    let mut ctx = RunContext::default();
    let outcome = linear_search(&ints(&[64, 34, 25, 12, 22, 11, 90]), &Element::Int(25), &mut ctx);
    assert!(outcome.found);
    assert_eq!(outcome.index, 2);
    assert_eq!(outcome.value, Some(Element::Int(25)));
    assert_eq!(ctx.comparisons(), 3);
    assert_eq!(ctx.steps_count(), 3);
}

#[test]
fn test_linear_search_not_found() {
    let mut ctx = RunContext::default();
    let outcome = linear_search(&ints(&[64, 34, 25, 12, 22, 11, 90]), &Element::Int(100), &mut ctx);
    assert!(!outcome.found);
    assert_eq!(outcome.index, -1);
    assert_eq!(outcome.value, None);
    assert_eq!(ctx.comparisons(), 7);
}

#[test]
fn test_linear_search_returns_first_match() {
    let mut ctx = RunContext::default();
    let outcome = linear_search(&ints(&[7, 3, 7, 3]), &Element::Int(3), &mut ctx);
    assert_eq!(outcome.index, 1);
}

#[test]
fn test_linear_search_step_content() {
    let mut ctx = RunContext::default();
    linear_search(&ints(&[4]), &Element::Int(4), &mut ctx);
    assert_eq!(
        ctx.steps(),
        &[Step::Compare {
            index: 0,
            value: Element::Int(4),
            target: Element::Int(4),
        }]
    );
}

#[test]
fn test_runner_requires_target() {
    let mut ctx = RunContext::default();
    let err = LinearSearchRunner
        .execute(&ints(&[1, 2]), &RunOptions::default(), &mut ctx)
        .unwrap_err();
    assert!(matches!(err, LabError::InvalidArgument(_)));
    assert_eq!(ctx.comparisons(), 0);
}

#[test]
fn test_runner_rejects_target_of_other_kind() {
    let mut ctx = RunContext::default();
    let err = LinearSearchRunner
        .execute(&ints(&[1, 2]), &RunOptions::with_target("2"), &mut ctx)
        .unwrap_err();
    assert!(matches!(err, LabError::InvalidArgument(_)));
}
