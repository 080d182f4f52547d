//! Runtime mirror of the kind lattice.
//!
//! [`KindTag`] names every kind as a plain value. The order and join on tags
//! are generated from the same table as the [`Is`](super::Is) and
//! [`Join`](super::Join) impls, so code that handles kinds as data (tests,
//! error messages, tooling) sees exactly the lattice the compiler enforces.

use std::fmt;

/// A value-level name for an optic kind.
///
/// # Examples
///
/// ```rust
/// use optica::kind::KindTag;
///
/// assert!(KindTag::Lens.is(KindTag::Traversal));
/// assert_eq!(
///     KindTag::Lens.join(KindTag::Prism),
///     Ok(KindTag::AffineTraversal)
/// );
/// assert!(KindTag::Setter.join(KindTag::Getter).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KindTag {
    /// Type equality; the bottom of the lattice.
    Equality,
    /// Isomorphism.
    Iso,
    /// Exactly one focus, readable and writable.
    Lens,
    /// Zero or one focus that can also be built from scratch.
    Prism,
    /// A lens turned around: build-only.
    ReversedLens,
    /// A prism turned around: read-only with exactly one focus.
    ReversedPrism,
    /// Zero or one focus, readable and writable.
    AffineTraversal,
    /// Exactly one focus, read-only.
    Getter,
    /// Zero or one focus, read-only.
    AffineFold,
    /// Any number of foci, readable and writable.
    Traversal,
    /// Any number of foci, read-only.
    Fold,
    /// Any number of foci, write-only.
    Setter,
    /// Build-only.
    Review,
}

impl KindTag {
    /// Every kind, strongest first.
    pub const ALL: [Self; 13] = [
        Self::Equality,
        Self::Iso,
        Self::Lens,
        Self::Prism,
        Self::ReversedLens,
        Self::ReversedPrism,
        Self::AffineTraversal,
        Self::Getter,
        Self::AffineFold,
        Self::Traversal,
        Self::Fold,
        Self::Setter,
        Self::Review,
    ];

    /// Human readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equality => "equality",
            Self::Iso => "iso",
            Self::Lens => "lens",
            Self::Prism => "prism",
            Self::ReversedLens => "reversed lens",
            Self::ReversedPrism => "reversed prism",
            Self::AffineTraversal => "affine traversal",
            Self::Getter => "getter",
            Self::AffineFold => "affine fold",
            Self::Traversal => "traversal",
            Self::Fold => "fold",
            Self::Setter => "setter",
            Self::Review => "review",
        }
    }

    /// Returns `true` when an optic of kind `self` can stand in for one of
    /// kind `other`.
    #[must_use]
    pub fn is(self, other: Self) -> bool {
        self.upper_bounds().contains(&other)
    }

    /// Least upper bound of two kinds.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleKinds`] when the two kinds share no upper bound,
    /// for example a setter and a getter.
    pub fn join(self, other: Self) -> Result<Self, IncompatibleKinds> {
        let common = || {
            self.upper_bounds()
                .iter()
                .copied()
                .filter(move |bound| other.is(*bound))
        };
        common()
            .find(|candidate| common().all(|bound| candidate.is(bound)))
            .ok_or(IncompatibleKinds {
                left: self,
                right: other,
            })
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Error returned when two kinds have no common upper bound.
///
/// The type-level equivalent is a missing [`Join`](super::Join) impl, which
/// the compiler reports when such optics are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncompatibleKinds {
    /// Kind of the outer optic.
    pub left: KindTag,
    /// Kind of the inner optic.
    pub right: KindTag,
}

impl fmt::Display for IncompatibleKinds {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "optics of kind `{}` and `{}` cannot be composed",
            self.left, self.right
        )
    }
}

impl std::error::Error for IncompatibleKinds {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KindTag::Lens, KindTag::Prism, KindTag::AffineTraversal)]
    #[case(KindTag::Prism, KindTag::ReversedPrism, KindTag::AffineFold)]
    #[case(KindTag::Getter, KindTag::Traversal, KindTag::Fold)]
    #[case(KindTag::Prism, KindTag::ReversedLens, KindTag::Review)]
    #[case(KindTag::Equality, KindTag::Setter, KindTag::Setter)]
    fn test_join_finds_least_upper_bound(
        #[case] left: KindTag,
        #[case] right: KindTag,
        #[case] expected: KindTag,
    ) {
        assert_eq!(left.join(right), Ok(expected));
        assert_eq!(right.join(left), Ok(expected));
    }

    #[rstest]
    #[case(KindTag::Setter, KindTag::Getter)]
    #[case(KindTag::Fold, KindTag::Setter)]
    #[case(KindTag::Lens, KindTag::Review)]
    #[case(KindTag::ReversedLens, KindTag::Traversal)]
    fn test_join_rejects_incompatible_kinds(#[case] left: KindTag, #[case] right: KindTag) {
        assert_eq!(left.join(right), Err(IncompatibleKinds { left, right }));
    }

    #[test]
    fn test_incompatible_kinds_message_names_both_kinds() {
        let error = KindTag::Setter.join(KindTag::Getter).unwrap_err();
        assert_eq!(
            error.to_string(),
            "optics of kind `setter` and `getter` cannot be composed"
        );
    }

    #[test]
    fn test_upper_bounds_start_with_self() {
        for tag in KindTag::ALL {
            assert_eq!(tag.upper_bounds().first(), Some(&tag));
        }
    }
}
