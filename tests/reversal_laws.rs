//! Property-based tests for reversal with `re`.
//!
//! - **Involution**: `o.re().re()` behaves exactly like `o`, for every
//!   reversible kind
//! - **Role exchange**: `o.re().view == o.review` and `o.re().review == o.view`

use optica::kind::{
    EqualityKind, GetterKind, IsoKind, Kind, LensKind, ReversedLensKind, ReversedPrismKind,
    ReviewKind,
};
use optica::optics::{equality, fst, iso, left, some, swapped, to, unto};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_reversed_iso_exchanges_roles(value in any::<i32>()) {
        let widened = iso(|n: i32| i64::from(n), |n: i64| i32::try_from(n).unwrap_or_default());
        let narrowed = widened.clone().re();
        prop_assert_eq!(narrowed.kind(), IsoKind::TAG);
        prop_assert_eq!(narrowed.view(i64::from(value)), widened.review(i64::from(value)));
        prop_assert_eq!(narrowed.review(value), widened.view(value));
    }

    #[test]
    fn prop_iso_double_reversal_is_identity(pair in any::<(u8, char)>(), other in any::<(char, u8)>()) {
        let swap = swapped::<(u8, char)>();
        let twice = swap.clone().re().re();
        prop_assert_eq!(twice.view(pair), swap.view(pair));
        prop_assert_eq!(twice.review(other), swap.review(other));
        prop_assert_eq!(twice.set(pair, other), swap.set(pair, other));
    }

    #[test]
    fn prop_lens_double_reversal_is_identity(pair in any::<(i32, bool)>(), value in any::<i32>()) {
        let first = fst::<i32, i32, bool>();
        let reversed = first.clone().re();
        prop_assert_eq!(reversed.kind(), ReversedLensKind::TAG);
        let twice = reversed.re();
        prop_assert_eq!(twice.kind(), LensKind::TAG);
        prop_assert_eq!(twice.view(pair), first.view(pair));
        prop_assert_eq!(twice.set(pair, value), first.set(pair, value));
    }

    #[test]
    fn prop_reversed_prism_is_a_getter(value in any::<u16>()) {
        let wrapped = some::<u16, u16>().re();
        prop_assert_eq!(wrapped.kind(), ReversedPrismKind::TAG);
        prop_assert!(wrapped.kind().is(GetterKind::TAG));
        prop_assert_eq!(wrapped.view(value), Some(value));
    }

    #[test]
    fn prop_prism_double_reversal_is_identity(source in any::<Option<i8>>(), value in any::<i8>()) {
        let present = some::<i8, i8>();
        let twice = present.clone().re().re();
        prop_assert_eq!(twice.preview(source), present.preview(source));
        prop_assert_eq!(twice.review(value), present.review(value));
        prop_assert_eq!(twice.over(source, i8::wrapping_abs), present.over(source, i8::wrapping_abs));
    }

    #[test]
    fn prop_getter_and_review_swap(value in any::<u32>()) {
        let halved = to(|n: u32| n / 2).re();
        prop_assert_eq!(halved.kind(), ReviewKind::TAG);
        prop_assert_eq!(halved.review(value), value / 2);

        let doubled = unto(|n: u32| n.wrapping_mul(2)).re();
        prop_assert_eq!(doubled.kind(), GetterKind::TAG);
        prop_assert_eq!(doubled.view(value), value.wrapping_mul(2));
    }

    #[test]
    fn prop_getter_double_reversal_is_identity(value in any::<u32>()) {
        let halved = to(|n: u32| n / 2).re().re();
        prop_assert_eq!(halved.kind(), GetterKind::TAG);
        prop_assert_eq!(halved.view(value), to(|n: u32| n / 2).view(value));
    }

    #[test]
    fn prop_review_double_reversal_is_identity(value in any::<u32>()) {
        let doubled = unto(|n: u32| n.wrapping_mul(2)).re().re();
        prop_assert_eq!(doubled.kind(), ReviewKind::TAG);
        prop_assert_eq!(doubled.review(value), unto(|n: u32| n.wrapping_mul(2)).review(value));
    }

    #[test]
    fn prop_equality_double_reversal_is_identity(value in any::<i16>()) {
        let same = equality::<i16, i16>().re().re();
        prop_assert_eq!(same.kind(), EqualityKind::TAG);
        prop_assert_eq!(same.over(value, i16::wrapping_neg), value.wrapping_neg());
        prop_assert_eq!(same.view(value), value);
        prop_assert_eq!(same.review(value), value);
    }
}

#[test]
fn reversed_prism_composes_as_getter() {
    let tagged = left::<u8, u8, ()>().re() % to(|either: optica::control::Either<u8, ()>| either.is_left());
    assert_eq!(tagged.kind(), GetterKind::TAG);
    assert!(tagged.view(3));
}
