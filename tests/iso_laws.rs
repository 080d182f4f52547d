//! Property-based tests for Iso laws and the iso combinators.
//!
//! - **ViewReview Law**: `iso.review(iso.view(source)) == source`
//! - **ReviewView Law**: `iso.view(iso.review(value)) == value`
//! - **Swapped**: `swap . swap == id`, and swapping commutes with mapping
//!   either component

use std::rc::Rc;

use optica::control::Either;
use optica::iso;
use optica::optics::{
    Function, coerced, curried, flipped, involuted, mapping, swapped, uncurried,
};
use proptest::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
struct Meters(f64);

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Meters> for f64 {
    fn from(meters: Meters) -> Self {
        meters.0
    }
}

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        ".*".prop_map(Either::Right),
    ]
}

// =============================================================================
// Iso laws
// =============================================================================

proptest! {
    #[test]
    fn prop_reversed_chars_view_review_law(source in ".*") {
        let reversed = iso!(
            |text: String| text.chars().rev().collect::<Vec<char>>(),
            |chars: Vec<char>| chars.into_iter().rev().collect::<String>()
        );
        prop_assert_eq!(reversed.review(reversed.view(source.clone())), source);
    }

    #[test]
    fn prop_reversed_chars_review_view_law(chars in prop::collection::vec(any::<char>(), 0..50)) {
        let reversed = iso!(
            |text: String| text.chars().rev().collect::<Vec<char>>(),
            |chars: Vec<char>| chars.into_iter().rev().collect::<String>()
        );
        prop_assert_eq!(reversed.view(reversed.review(chars.clone())), chars);
    }

    #[test]
    fn prop_with_iso_is_loss_free(value in any::<i32>()) {
        let widened = iso!(|n: i32| i64::from(n), |n: i64| i32::try_from(n).unwrap_or_default());
        let (forward, backward) = widened.with_iso();
        prop_assert_eq!(forward(value), i64::from(value));
        prop_assert_eq!(backward(i64::from(value)), value);
    }

    #[test]
    fn prop_coerced_round_trip(value in any::<f64>().prop_filter("comparable", |v| !v.is_nan())) {
        let meters = coerced::<f64, Meters>();
        prop_assert_eq!(meters.view(value), Meters(value));
        prop_assert_eq!(meters.review(Meters(value)), value);
    }

    #[test]
    fn prop_involuted_laws(value in any::<bool>()) {
        let not = involuted(|flag: bool| !flag);
        prop_assert_eq!(not.review(not.view(value)), value);
        prop_assert_eq!(not.view(value), !value);
    }
}

// =============================================================================
// mapping
// =============================================================================

proptest! {
    #[test]
    fn prop_mapping_vec_preserves_shape(values in prop::collection::vec(any::<i16>(), 0..20)) {
        let widened = iso!(|n: i16| i32::from(n), |n: i32| i16::try_from(n).unwrap_or_default());
        let lifted = mapping::<Vec<i16>, _, _, _, _, _, _, _>(widened);
        let viewed = lifted.view(values.clone());
        prop_assert_eq!(viewed.len(), values.len());
        prop_assert_eq!(lifted.review(viewed), values);
    }

    #[test]
    fn prop_mapping_result_leaves_errors(error in ".*") {
        let doubled = iso!(|n: i32| n.wrapping_mul(2), |n: i32| n / 2);
        let lifted = mapping::<Result<i32, String>, _, _, _, _, _, _, _>(doubled);
        prop_assert_eq!(lifted.view(Err(error.clone())), Err(error));
        prop_assert_eq!(lifted.view(Ok(3)), Ok(6));
    }
}

// =============================================================================
// Swapped
// =============================================================================

proptest! {
    #[test]
    fn prop_pair_swap_twice_is_identity(pair in any::<(i32, char)>()) {
        prop_assert_eq!(swapped::<(char, i32)>().view(swapped::<(i32, char)>().view(pair)), pair);
    }

    #[test]
    fn prop_either_swap_twice_is_identity(either in either_strategy()) {
        let there = swapped::<Either<i32, String>>().view(either.clone());
        prop_assert_eq!(swapped::<Either<String, i32>>().view(there), either);
    }

    #[test]
    fn prop_pair_swap_commutes_with_map(pair in any::<(i32, char)>()) {
        let increment = |n: i32| n.wrapping_add(1);
        let mapped_then_swapped = swapped::<(i32, char)>().view((increment(pair.0), pair.1));
        let swapped_then_mapped = {
            let (c, n) = swapped::<(i32, char)>().view(pair);
            (c, increment(n))
        };
        prop_assert_eq!(mapped_then_swapped, swapped_then_mapped);
    }

    #[test]
    fn prop_either_swap_commutes_with_map(either in either_strategy()) {
        let length = |text: String| text.len();
        let mapped_then_swapped =
            swapped::<Either<i32, usize>>().view(either.clone().map_right(length));
        let swapped_then_mapped = swapped::<Either<i32, String>>().view(either).map_left(length);
        prop_assert_eq!(mapped_then_swapped, swapped_then_mapped);
    }

    #[test]
    fn prop_swapped_review_is_inverse(pair in any::<(u8, bool)>()) {
        let swap = swapped::<(u8, bool)>();
        prop_assert_eq!(swap.review(swap.view(pair)), pair);
    }
}

// =============================================================================
// Function isos
// =============================================================================

proptest! {
    #[test]
    fn prop_curried_agrees_with_pair_function(x in -1000i32..1000, y in -1000i32..1000) {
        let pair_function: Function<(i32, i32), i32> = Rc::new(|(a, b)| a * 3 - b);
        let curried_function = curried().view(Rc::clone(&pair_function));
        prop_assert_eq!(curried_function(x)(y), pair_function((x, y)));
        let restored = uncurried().view(curried_function);
        prop_assert_eq!(restored((x, y)), pair_function((x, y)));
    }

    #[test]
    fn prop_flipped_swaps_arguments(x in -1000i32..1000, y in -1000i32..1000) {
        let minus: Function<i32, Function<i32, i32>> = Rc::new(|a| Rc::new(move |b| a - b));
        let flipped_minus = flipped().view(Rc::clone(&minus));
        prop_assert_eq!(flipped_minus(y)(x), minus(x)(y));
    }
}
