//! Optic kinds and the capability lattice.
//!
//! Every optic carries a zero-sized kind tag in its type. The tags are
//! ordered by capability: a stronger kind can be used wherever a weaker one
//! is expected. Covering relation:
//!
//! ```text
//! Equality       < Iso
//! Iso            < Lens, Prism, ReversedLens, ReversedPrism
//! Lens           < AffineTraversal, Getter
//! Prism          < AffineTraversal, Review
//! ReversedPrism  < Getter
//! ReversedLens   < Review
//! AffineTraversal < Traversal, AffineFold
//! Getter         < AffineFold
//! AffineFold     < Fold
//! Traversal      < Fold, Setter
//! ```
//!
//! - [`Is`] is the partial order. `K: Is<L>` holds exactly when an optic of
//!   kind `K` may be cast to kind `L`.
//! - [`Join`] gives the kind of a composition. Pairs with no common upper
//!   bound, such as a setter and a getter, have no impl, so composing them is
//!   rejected by the compiler.
//! - [`Reversible`] lists the kinds that [`Optic::re`](crate::optics::Optic::re)
//!   accepts and what they turn into.
//!
//! # Examples
//!
//! ```rust
//! use optica::kind::{AffineTraversalKind, Join, LensKind, PrismKind};
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(<LensKind as Join<PrismKind>>::Output, AffineTraversalKind);
//! ```
//!
//! A read-only and a write-only optic have nothing in common:
//!
//! ```compile_fail
//! use optica::kind::{GetterKind, Join, SetterKind};
//!
//! fn joined<K: Join<GetterKind>>() {}
//! joined::<SetterKind>();
//! ```

mod tag;

pub use tag::{IncompatibleKinds, KindTag};

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A kind tag.
///
/// Sealed: the lattice is closed.
pub trait Kind: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    /// The value-level name of this kind.
    const TAG: KindTag;
}

/// `Self` can be used wherever an optic of kind `Target` is expected.
///
/// Reflexive and transitive.
#[diagnostic::on_unimplemented(
    message = "an optic of kind `{Self}` cannot be used as `{Target}`",
    label = "`{Self}` lacks the capabilities of `{Target}`",
    note = "an optic can only be used as an equal or weaker kind, e.g. `LensKind` as `TraversalKind`"
)]
pub trait Is<Target: Kind>: Kind {}

/// Least upper bound of `Self` and `Other`: the kind of composing an optic of
/// kind `Self` with one of kind `Other`.
#[diagnostic::on_unimplemented(
    message = "optics of kind `{Self}` and `{Other}` cannot be composed",
    label = "no kind is weaker than both `{Self}` and `{Other}`",
    note = "read-only and write-only optics never compose with each other"
)]
pub trait Join<Other: Kind>: Kind {
    /// The joined kind.
    type Output: Kind;
}

/// Kinds whose optics can be turned around with
/// [`Optic::re`](crate::optics::Optic::re).
#[diagnostic::on_unimplemented(
    message = "an optic of kind `{Self}` cannot be reversed",
    note = "only equalities, isos, lenses, prisms, getters and reviews have a reversed form"
)]
pub trait Reversible: Kind {
    /// Kind of the reversed optic.
    type Reversed: Kind;
}

macro_rules! kinds {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct [<$name Kind>];

                impl sealed::Sealed for [<$name Kind>] {}

                impl Kind for [<$name Kind>] {
                    const TAG: KindTag = KindTag::$name;
                }
            )*
        }
    };
}

kinds! {
    /// Type equality. Every other kind is weaker.
    Equality;
    /// Isomorphism: lossless conversion in both directions.
    Iso;
    /// Exactly one focus that can be read and replaced.
    Lens;
    /// A variant that may not match and can be built from its payload.
    Prism;
    /// A lens turned around. Only usable to build.
    ReversedLens;
    /// A prism turned around. Always yields exactly one value, read-only.
    ReversedPrism;
    /// Zero or one focus that can be read and replaced.
    AffineTraversal;
    /// Exactly one focus, read-only.
    Getter;
    /// Zero or one focus, read-only.
    AffineFold;
    /// Any number of foci that can be read and replaced.
    Traversal;
    /// Any number of foci, read-only.
    Fold;
    /// Any number of foci, write-only.
    Setter;
    /// Build-only.
    Review;
}

// Each row lists every kind the left kind can stand in for, itself first.
macro_rules! capability_order {
    ($($kind:ident => [$($weaker:ident),* $(,)?];)*) => {
        paste::paste! {
            $($(impl Is<[<$weaker Kind>]> for [<$kind Kind>] {})*)*
        }

        impl KindTag {
            /// Every kind this kind can stand in for, itself included.
            #[must_use]
            pub const fn upper_bounds(self) -> &'static [Self] {
                match self {
                    $(Self::$kind => &[$(Self::$weaker),*],)*
                }
            }
        }
    };
}

capability_order! {
    Equality => [
        Equality, Iso, Lens, Prism, ReversedLens, ReversedPrism, AffineTraversal,
        Getter, AffineFold, Traversal, Fold, Setter, Review,
    ];
    Iso => [
        Iso, Lens, Prism, ReversedLens, ReversedPrism, AffineTraversal,
        Getter, AffineFold, Traversal, Fold, Setter, Review,
    ];
    Lens => [Lens, AffineTraversal, Getter, AffineFold, Traversal, Fold, Setter];
    Prism => [Prism, AffineTraversal, Review, AffineFold, Traversal, Fold, Setter];
    ReversedLens => [ReversedLens, Review];
    ReversedPrism => [ReversedPrism, Getter, AffineFold, Fold];
    AffineTraversal => [AffineTraversal, AffineFold, Traversal, Fold, Setter];
    Getter => [Getter, AffineFold, Fold];
    AffineFold => [AffineFold, Fold];
    Traversal => [Traversal, Fold, Setter];
    Fold => [Fold];
    Setter => [Setter];
    Review => [Review];
}

macro_rules! least_upper_bounds {
    (
        same: [$($same:ident),* $(,)?];
        $($left:ident | $right:ident => $output:ident;)*
    ) => {
        paste::paste! {
            $(
                impl Join<[<$same Kind>]> for [<$same Kind>] {
                    type Output = [<$same Kind>];
                }
            )*
            $(
                impl Join<[<$right Kind>]> for [<$left Kind>] {
                    type Output = [<$output Kind>];
                }

                impl Join<[<$left Kind>]> for [<$right Kind>] {
                    type Output = [<$output Kind>];
                }
            )*
        }

        /// Every `(left, right, output)` triple with a `Join` impl.
        #[cfg(test)]
        pub(crate) const JOIN_TABLE: &[(KindTag, KindTag, KindTag)] = &[
            $((KindTag::$same, KindTag::$same, KindTag::$same),)*
            $(
                (KindTag::$left, KindTag::$right, KindTag::$output),
                (KindTag::$right, KindTag::$left, KindTag::$output),
            )*
        ];
    };
}

least_upper_bounds! {
    same: [
        Equality, Iso, Lens, Prism, ReversedLens, ReversedPrism, AffineTraversal,
        Getter, AffineFold, Traversal, Fold, Setter, Review,
    ];

    Equality | Iso => Iso;
    Equality | Lens => Lens;
    Equality | Prism => Prism;
    Equality | ReversedLens => ReversedLens;
    Equality | ReversedPrism => ReversedPrism;
    Equality | AffineTraversal => AffineTraversal;
    Equality | Getter => Getter;
    Equality | AffineFold => AffineFold;
    Equality | Traversal => Traversal;
    Equality | Fold => Fold;
    Equality | Setter => Setter;
    Equality | Review => Review;

    Iso | Lens => Lens;
    Iso | Prism => Prism;
    Iso | ReversedLens => ReversedLens;
    Iso | ReversedPrism => ReversedPrism;
    Iso | AffineTraversal => AffineTraversal;
    Iso | Getter => Getter;
    Iso | AffineFold => AffineFold;
    Iso | Traversal => Traversal;
    Iso | Fold => Fold;
    Iso | Setter => Setter;
    Iso | Review => Review;

    Lens | Prism => AffineTraversal;
    Lens | ReversedPrism => Getter;
    Lens | AffineTraversal => AffineTraversal;
    Lens | Getter => Getter;
    Lens | AffineFold => AffineFold;
    Lens | Traversal => Traversal;
    Lens | Fold => Fold;
    Lens | Setter => Setter;

    Prism | ReversedLens => Review;
    Prism | ReversedPrism => AffineFold;
    Prism | AffineTraversal => AffineTraversal;
    Prism | Getter => AffineFold;
    Prism | AffineFold => AffineFold;
    Prism | Traversal => Traversal;
    Prism | Fold => Fold;
    Prism | Setter => Setter;
    Prism | Review => Review;

    ReversedLens | Review => Review;

    ReversedPrism | AffineTraversal => AffineFold;
    ReversedPrism | Getter => Getter;
    ReversedPrism | AffineFold => AffineFold;
    ReversedPrism | Traversal => Fold;
    ReversedPrism | Fold => Fold;

    AffineTraversal | Getter => AffineFold;
    AffineTraversal | AffineFold => AffineFold;
    AffineTraversal | Traversal => Traversal;
    AffineTraversal | Fold => Fold;
    AffineTraversal | Setter => Setter;

    Getter | AffineFold => AffineFold;
    Getter | Traversal => Fold;
    Getter | Fold => Fold;

    AffineFold | Traversal => Fold;
    AffineFold | Fold => Fold;

    Traversal | Fold => Fold;
    Traversal | Setter => Setter;
}

impl Reversible for EqualityKind {
    type Reversed = Self;
}

impl Reversible for IsoKind {
    type Reversed = Self;
}

impl Reversible for LensKind {
    type Reversed = ReversedLensKind;
}

impl Reversible for ReversedLensKind {
    type Reversed = LensKind;
}

impl Reversible for PrismKind {
    type Reversed = ReversedPrismKind;
}

impl Reversible for ReversedPrismKind {
    type Reversed = PrismKind;
}

impl Reversible for GetterKind {
    type Reversed = ReviewKind;
}

impl Reversible for ReviewKind {
    type Reversed = GetterKind;
}
