//! Property-based tests for the kind lattice.
//!
//! The runtime [`KindTag`] relation and the compile-time `Is`/`Join` traits
//! describe the same order. This module checks the order laws on the tags
//! and pins a sample of the type-level facts with `static_assertions`.
//!
//! - **Partial order**: `is` is reflexive, antisymmetric and transitive
//! - **Join**: the least upper bound, commutative, associative and idempotent
//! - **Bottom**: `Equality` joins with anything to give the other kind

use optica::kind::{
    AffineFoldKind, AffineTraversalKind, EqualityKind, FoldKind, GetterKind, IncompatibleKinds,
    Is, IsoKind, Join, KindTag, LensKind, PrismKind, Reversible, ReversedLensKind,
    ReversedPrismKind, ReviewKind, SetterKind, TraversalKind,
};
use proptest::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

// =============================================================================
// Type-level facts
// =============================================================================

assert_impl_all!(EqualityKind: Is<IsoKind>, Is<SetterKind>, Is<ReviewKind>, Is<FoldKind>);
assert_impl_all!(IsoKind: Is<LensKind>, Is<PrismKind>, Is<ReversedLensKind>, Is<ReversedPrismKind>);
assert_impl_all!(PrismKind: Is<ReviewKind>, Is<AffineTraversalKind>);
assert_impl_all!(ReversedPrismKind: Is<GetterKind>, Is<FoldKind>);
assert_not_impl_any!(GetterKind: Is<SetterKind>, Is<TraversalKind>, Is<LensKind>);
assert_not_impl_any!(ReviewKind: Is<GetterKind>, Is<PrismKind>);
assert_not_impl_any!(ReversedLensKind: Is<LensKind>, Is<FoldKind>);
assert_not_impl_any!(FoldKind: Join<SetterKind>, Join<ReviewKind>);

assert_type_eq_all!(<PrismKind as Join<GetterKind>>::Output, AffineFoldKind);
assert_type_eq_all!(<TraversalKind as Join<SetterKind>>::Output, SetterKind);
assert_type_eq_all!(<ReversedPrismKind as Join<TraversalKind>>::Output, FoldKind);
assert_type_eq_all!(<PrismKind as Join<ReversedLensKind>>::Output, ReviewKind);
assert_type_eq_all!(<EqualityKind as Join<AffineTraversalKind>>::Output, AffineTraversalKind);
assert_type_eq_all!(<GetterKind as Reversible>::Reversed, ReviewKind);
assert_type_eq_all!(<PrismKind as Reversible>::Reversed, ReversedPrismKind);

// =============================================================================
// Strategies
// =============================================================================

fn kind_tag() -> impl Strategy<Value = KindTag> {
    prop::sample::select(KindTag::ALL.to_vec())
}

// =============================================================================
// Partial order
// =============================================================================

proptest! {
    #[test]
    fn prop_is_reflexive(kind in kind_tag()) {
        prop_assert!(kind.is(kind));
    }

    #[test]
    fn prop_is_antisymmetric(first in kind_tag(), second in kind_tag()) {
        if first.is(second) && second.is(first) {
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_is_transitive(first in kind_tag(), second in kind_tag(), third in kind_tag()) {
        if first.is(second) && second.is(third) {
            prop_assert!(first.is(third));
        }
    }

    #[test]
    fn prop_equality_is_bottom(kind in kind_tag()) {
        prop_assert!(KindTag::Equality.is(kind));
        prop_assert_eq!(KindTag::Equality.join(kind), Ok(kind));
    }
}

// =============================================================================
// Join
// =============================================================================

proptest! {
    #[test]
    fn prop_join_is_commutative(first in kind_tag(), second in kind_tag()) {
        prop_assert_eq!(first.join(second).ok(), second.join(first).ok());
    }

    #[test]
    fn prop_join_is_idempotent(kind in kind_tag()) {
        prop_assert_eq!(kind.join(kind), Ok(kind));
    }

    #[test]
    fn prop_join_is_least_upper_bound(first in kind_tag(), second in kind_tag()) {
        let bounds: Vec<KindTag> = KindTag::ALL
            .into_iter()
            .filter(|bound| first.is(*bound) && second.is(*bound))
            .collect();
        match first.join(second) {
            Ok(joined) => {
                prop_assert!(first.is(joined));
                prop_assert!(second.is(joined));
                prop_assert!(bounds.iter().all(|bound| joined.is(*bound)));
            }
            Err(error) => {
                prop_assert!(bounds.is_empty());
                prop_assert_eq!(error, IncompatibleKinds { left: first, right: second });
            }
        }
    }

    #[test]
    fn prop_join_is_associative(first in kind_tag(), second in kind_tag(), third in kind_tag()) {
        let left_grouped = first.join(second).and_then(|joined| joined.join(third)).ok();
        let right_grouped = second.join(third).and_then(|joined| first.join(joined)).ok();
        prop_assert_eq!(left_grouped, right_grouped);
    }

    #[test]
    fn prop_join_of_comparable_kinds_is_weaker(first in kind_tag(), second in kind_tag()) {
        if first.is(second) {
            prop_assert_eq!(first.join(second), Ok(second));
        }
    }
}

#[test]
fn read_only_and_write_only_kinds_have_no_join() {
    let error = KindTag::Setter.join(KindTag::Getter).unwrap_err();
    assert_eq!(error.to_string(), "optics of kind `setter` and `getter` cannot be composed");
}
