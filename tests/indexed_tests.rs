//! Tests for indexed optics and the indexed/unindexed bridge.
//!
//! - An indexed optic can be used wherever the unindexed one is expected
//! - Composition concatenates index lists, outer first
//! - Positions are assigned in the same left-to-right order as `to_vec`

use optica::index::{NoIx, WithIx};
use optica::kind::{FoldKind, Kind, TraversalKind};
use optica::optics::{chars, fst, ichars, ifolded, itraversed, snd, some, traversed};
use optica::typeclass::{OptionEffect, Sum};
use proptest::prelude::*;
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(<NoIx as optica::index::Append<WithIx<usize>>>::Output, WithIx<usize>);
assert_type_eq_all!(
    <WithIx<usize> as optica::index::Append<WithIx<char>>>::Output,
    (usize, (char, ()))
);

// =============================================================================
// Downgrade
// =============================================================================

#[test]
fn indexed_fold_over_foo() {
    let text = "foo".to_string();
    assert_eq!(ichars().kind(), FoldKind::TAG);
    assert_eq!(ichars().to_vec(text.clone()), vec!['f', 'o', 'o']);
    assert_eq!(ichars().ito_vec(text.clone()), vec![(0, 'f'), (1, 'o'), (2, 'o')]);
    assert_eq!(ichars().erase_indices().to_vec(text.clone()), chars().to_vec(text.clone()));
    assert_eq!(ichars().length(text), 3);
}

proptest! {
    #[test]
    fn prop_ito_vec_agrees_with_to_vec(values in prop::collection::vec(any::<u8>(), 0..30)) {
        let positioned = ifolded::<u8>().ito_vec(values.clone());
        let plain = ifolded::<u8>().to_vec(values.clone());
        prop_assert_eq!(positioned.iter().map(|(_, value)| *value).collect::<Vec<_>>(), plain);
        prop_assert!(positioned.iter().enumerate().all(|(expected, (position, _))| expected == *position));
    }

    #[test]
    fn prop_ichars_counts_characters(text in ".{0,20}") {
        let positions: Vec<usize> = ichars().ito_vec(text.clone()).into_iter().map(|(i, _)| i).collect();
        prop_assert_eq!(positions, (0..text.chars().count()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_erase_indices_keeps_behavior(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let erased = itraversed::<i32, i32>().erase_indices();
        prop_assert_eq!(erased.kind(), TraversalKind::TAG);
        prop_assert_eq!(
            erased.over(values.clone(), i32::wrapping_neg),
            traversed::<i32, i32>().over(values, i32::wrapping_neg)
        );
    }

    #[test]
    fn prop_iset_replaces_with_positions(values in prop::collection::vec(any::<bool>(), 0..20)) {
        let replaced = itraversed::<bool, usize>().iset(values.clone(), |position| position);
        prop_assert_eq!(replaced, (0..values.len()).collect::<Vec<_>>());
    }
}

// =============================================================================
// Index lists under composition
// =============================================================================

#[test]
fn two_indexed_optics_concatenate_indices() {
    let cells = itraversed::<Vec<char>, Vec<char>>() % itraversed::<char, char>();
    let grid = vec![vec!['a', 'b'], vec!['c']];
    let labelled = cells.icompose(|row, column| (row, column));
    assert_eq!(
        labelled.ito_vec(grid),
        vec![((0, 0), 'a'), ((0, 1), 'b'), ((1, 0), 'c')]
    );
}

#[test]
fn repeated_index_types_are_kept() {
    let cells = itraversed::<Vec<i32>, Vec<i32>>() % itraversed::<i32, i32>();
    let diagonal = cells.icompose(|row, column| row == column);
    assert_eq!(
        diagonal.iover(vec![vec![1, 2], vec![3, 4]], |on_diagonal, n| if on_diagonal { n * 10 } else { n }),
        vec![vec![10, 2], vec![3, 40]]
    );
}

#[test]
fn unindexed_optics_pass_indices_through() {
    let scores = itraversed::<(String, u32), (String, u32)>() % snd::<u32, u32, String>();
    let table = vec![("a".to_string(), 5), ("b".to_string(), 7)];
    assert_eq!(scores.ito_vec(table.clone()), vec![(0, 5), (1, 7)]);
    assert_eq!(scores.ifold_map(table, |position, score| Sum(position as u32 * score)), Sum(7));

    let nested = fst::<Vec<u8>, Vec<u8>, ()>() % itraversed::<u8, u8>();
    assert_eq!(nested.iover((vec![1, 1, 1], ()), |i, n| n + i as u8), (vec![1, 2, 3], ()));
}

#[test]
fn indices_restrict_foci() {
    let tail = itraversed::<char, char>().indices(|position| *position > 0);
    assert_eq!(tail.kind(), TraversalKind::TAG);
    assert_eq!(tail.ito_vec(vec!['h', 'e', 'y']), vec![(1, 'e'), (2, 'y')]);
    assert_eq!(tail.over(vec!['h', 'e', 'y'], |c| c.to_ascii_uppercase()), vec!['h', 'E', 'Y']);
}

#[test]
fn reindexed_and_itraverse() {
    let one_based = itraversed::<&str, usize>().reindexed(|position| position + 1);
    let lengths = one_based.itraverse::<OptionEffect>(vec!["ab", "c"], |position, text| {
        text.len().checked_mul(position)
    });
    assert_eq!(lengths, Some(vec![2, 2]));
}

// =============================================================================
// Reversed optics inside indexed folds
// =============================================================================

#[test]
fn indexed_fold_then_reversed_prism() {
    let wrapped = ifolded::<i32>() % some::<i32, i32>().re();
    assert_eq!(wrapped.kind(), FoldKind::TAG);
    assert_eq!(wrapped.to_vec(vec![1, 2]), vec![Some(1), Some(2)]);
    assert_eq!(wrapped.ito_vec(vec![1, 2]), vec![(0, Some(1)), (1, Some(2))]);
}

#[test]
fn indexed_fold_then_lens_then_reversed_prism() {
    let wrapped_firsts =
        ifolded::<(i32, char)>() % (fst::<i32, i32, char>() % some::<i32, i32>().re());
    let pairs = vec![(1, 'a'), (2, 'b')];
    assert_eq!(wrapped_firsts.to_vec(pairs.clone()), vec![Some(1), Some(2)]);
    assert_eq!(wrapped_firsts.ito_vec(pairs), vec![(0, Some(1)), (1, Some(2))]);
}
