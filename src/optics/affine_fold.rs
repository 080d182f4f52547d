//! Affine folds: at most one focus, read-only.

use std::fmt;

use super::{Optic, Transform};
use crate::control::Either;
use crate::index::NoIx;
use crate::kind::{AffineFoldKind, Is, Kind};
use crate::profunctor::{Bicontravariant, Choice, Forget};
use crate::typeclass::First;

/// An affine fold reading at most one `A` out of an `S`.
pub type AffineFold<S, A, R> = Optic<AffineFoldKind, NoIx, S, S, A, A, R>;

/// Representation of [`afolding`].
#[derive(Clone, Copy)]
pub struct AfoldingRepr<F> {
    preview: F,
}

impl<F> fmt::Debug for AfoldingRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AfoldingRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, F> Transform<P, NoIx, S, T, A, B> for AfoldingRepr<F>
where
    P: Choice + Bicontravariant,
    F: Fn(S) -> Option<A>,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        let matched = P::lmap(
            P::right::<(NoIx, A), B, ()>(arrow),
            move |source: S| match (self.preview)(source) {
                Some(focus) => Either::Right(((), focus)),
                None => Either::Left(()),
            },
        );
        P::rphantom::<S, Either<(), B>, T>(matched)
    }
}

/// Builds an affine fold from a partial function.
///
/// # Examples
///
/// ```rust
/// use optica::optics::afolding;
///
/// let head = afolding(|values: Vec<i32>| values.first().copied());
/// assert_eq!(head.preview(vec![4, 5]), Some(4));
/// assert_eq!(head.preview(vec![]), None);
/// ```
#[must_use]
pub const fn afolding<S, A, F>(preview: F) -> AffineFold<S, A, AfoldingRepr<F>>
where
    F: Fn(S) -> Option<A>,
{
    Optic::new(AfoldingRepr { preview })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Reads the focus if there is one.
    ///
    /// Traversals and folds may have several foci; use
    /// [`first`](Optic::first) on those.
    ///
    /// ```compile_fail
    /// use optica::optics::folded;
    ///
    /// let _ = folded::<i32>().preview(vec![1, 2]);
    /// ```
    ///
    /// ```rust
    /// use optica::optics::folded;
    ///
    /// assert_eq!(folded::<i32>().first(vec![1, 2]), Some(1));
    /// ```
    pub fn preview(&self, source: S) -> Option<A>
    where
        K: Is<AffineFoldKind>,
        R: Transform<Forget<First<A>>, I, S, T, A, B>,
    {
        let reader = self.run::<Forget<First<A>>>(Box::new(|focus: A| First(Some(focus))));
        reader(source).into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(12))]
    #[case("x", None)]
    fn test_afolding_preview(#[case] text: &str, #[case] expected: Option<i32>) {
        let parsed = afolding(|text: String| text.parse::<i32>().ok());
        assert_eq!(parsed.preview(text.to_string()), expected);
    }

    #[test]
    fn test_afolding_to_vec_has_at_most_one_element() {
        let parsed = afolding(|text: String| text.parse::<i32>().ok());
        assert_eq!(parsed.to_vec("3".to_string()), vec![3]);
        assert!(parsed.is_empty("three".to_string()));
    }
}
