//! Property-based tests for Traversal laws.
//!
//! 1. **Identity Law**: `traversal.over(source, |x| x) == source`
//! 2. **Composition Law**: `over(over(s, f), g) == over(s, |x| g(f(x)))`
//! 3. **Identity Effect**: `traverse::<IdentityEffect>(s, f) == over(s, f)`
//!
//! Foci are visited left to right, so effects short-circuit at the first
//! failing focus and `to_vec` lists foci in structure order.

use std::cell::RefCell;

use optica::kind::{FoldKind, Kind, TraversalKind};
use optica::optics::{filtered, fst, snd, traversal, traversed};
use optica::typeclass::{IdentityEffect, OptionEffect, ResultEffect};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..20)
}

// =============================================================================
// Laws on Vec
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(values in small_vec()) {
        let each = traversed::<i32, i32>();
        prop_assert_eq!(each.over(values.clone(), |x| x), values);
    }

    #[test]
    fn prop_composition_law(values in small_vec()) {
        let each = traversed::<i32, i32>();
        let twice = each.over(each.over(values.clone(), |x| x + 1), |x| x * 3);
        prop_assert_eq!(twice, each.over(values, |x| (x + 1) * 3));
    }

    #[test]
    fn prop_identity_effect_matches_over(values in small_vec()) {
        let each = traversed::<i32, i64>();
        let traversed_values = each.traverse::<IdentityEffect>(values.clone(), |x| i64::from(x) * 2);
        prop_assert_eq!(traversed_values, each.over(values, |x| i64::from(x) * 2));
    }

    #[test]
    fn prop_to_vec_keeps_structure_order(values in small_vec()) {
        prop_assert_eq!(traversed::<i32, i32>().to_vec(values.clone()), values);
    }

    #[test]
    fn prop_option_effect_fails_if_any_focus_fails(values in small_vec()) {
        let result = traversed::<i32, u32>()
            .traverse::<OptionEffect>(values.clone(), |x| u32::try_from(x).ok());
        let all_non_negative = values.iter().all(|x| *x >= 0);
        prop_assert_eq!(result.is_some(), all_non_negative);
    }

    #[test]
    fn prop_result_effect_reports_first_failure(values in small_vec()) {
        let result = traversed::<i32, i32>().traverse::<ResultEffect<i32>>(values.clone(), |x| {
            if x < 0 { Err(x) } else { Ok(x) }
        });
        match values.iter().copied().find(|x| *x < 0) {
            Some(first_negative) => prop_assert_eq!(result, Err(first_negative)),
            None => prop_assert_eq!(result, Ok(values)),
        }
    }
}

// =============================================================================
// Composed traversals
// =============================================================================

proptest! {
    #[test]
    fn prop_nested_traversal_visits_rows_then_columns(
        rows in prop::collection::vec(small_vec(), 0..5)
    ) {
        let cells = traversed::<Vec<i32>, Vec<i32>>() % traversed::<i32, i32>();
        let flattened: Vec<i32> = rows.iter().flatten().copied().collect();
        prop_assert_eq!(cells.to_vec(rows.clone()), flattened.clone());
        prop_assert_eq!(cells.length(rows), flattened.len());
    }

    #[test]
    fn prop_filtered_only_touches_matching_foci(values in small_vec()) {
        let evens = traversed::<i32, i32>() % filtered(|n: &i32| n % 2 == 0);
        let updated = evens.over(values.clone(), |n| n + 2);
        let expected: Vec<i32> = values.iter().map(|n| if n % 2 == 0 { n + 2 } else { *n }).collect();
        prop_assert_eq!(updated, expected);
    }

    #[test]
    fn prop_traversal_through_lens_changes_type(pairs in prop::collection::vec(any::<(u8, bool)>(), 0..10)) {
        let firsts = traversed::<(u8, bool), (String, bool)>() % fst::<u8, String, bool>();
        let described = firsts.over(pairs.clone(), |n| n.to_string());
        prop_assert_eq!(described.len(), pairs.len());
        for ((text, flag), (n, original_flag)) in described.into_iter().zip(pairs) {
            prop_assert_eq!(text, n.to_string());
            prop_assert_eq!(flag, original_flag);
        }
    }
}

// =============================================================================
// Hand-built traversal
// =============================================================================

type BothSplit = fn((i32, i32)) -> (Vec<i32>, ());
type BothRebuild = fn((), Vec<i32>) -> (i32, i32);

fn split_both(pair: (i32, i32)) -> (Vec<i32>, ()) {
    (vec![pair.0, pair.1], ())
}

fn rebuild_both((): (), values: Vec<i32>) -> (i32, i32) {
    match values.as_slice() {
        [first, second] => (*first, *second),
        _ => (0, 0),
    }
}

#[test]
fn effects_run_left_to_right() {
    let both = traversal(split_both as BothSplit, rebuild_both as BothRebuild);
    let log = RefCell::new(Vec::new());
    let result = both.traverse::<OptionEffect>((1, 2), |x| {
        log.borrow_mut().push(x);
        Some(x * 10)
    });
    assert_eq!(result, Some((10, 20)));
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn traversal_kinds_after_composition() {
    let both = traversal(split_both as BothSplit, rebuild_both as BothRebuild);
    assert_eq!(both.kind(), TraversalKind::TAG);
    let read_only = both.cast::<FoldKind>();
    assert_eq!(read_only.to_vec((3, 4)), vec![3, 4]);
    let seconds = traversed::<(char, i32), (char, i32)>() % snd::<i32, i32, char>();
    assert_eq!(seconds.to_vec(vec![('a', 1), ('b', 2)]), vec![1, 2]);
}
