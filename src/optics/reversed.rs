//! Reversal: running an optic from the focus back to the structure.
//!
//! `optic.re()` exchanges the roles of structure and focus. What can be read
//! through the original can be built through the reversed optic and the
//! other way round:
//!
//! | Original | Reversed |
//! |---|---|
//! | equality | equality |
//! | iso | iso |
//! | lens | reversed lens (a review) |
//! | prism | reversed prism (a getter) |
//! | getter | review |
//! | review | getter |
//!
//! The representation is run against [`Reversed`], which turns each
//! capability into its dual, so nothing is relabelled: a reversed prism
//! really reads by building.
//!
//! # Examples
//!
//! ```rust
//! use optica::optics::{some, to};
//!
//! let length = to(|text: String| text.len());
//! assert_eq!(length.re().review("four".to_string()), 4);
//!
//! let wrap = some::<i32, i32>().re();
//! assert_eq!(wrap.view(3), Some(3));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::Reversible;
use crate::profunctor::{Profunctor, Reversed};

/// Representation of [`Optic::re`].
pub struct ReversedRepr<R, S, T, A, B> {
    inner: R,
    marker: PhantomData<fn() -> (S, T, A, B)>,
}

impl<P, R, S, T, A, B> Transform<P, NoIx, B, A, T, S> for ReversedRepr<R, S, T, A, B>
where
    P: Profunctor,
    R: Transform<Reversed<P, (NoIx, A), B>, NoIx, S, T, A, B>,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, T), S>) -> P::Arrow<'a, B, A>
    where
        P: 'a,
        B: 'a,
        A: 'a,
        T: 'a,
        S: 'a,
    {
        let identity: Box<dyn FnOnce(P::Arrow<'a, B, (NoIx, A)>) -> P::Arrow<'a, B, (NoIx, A)> + 'a> =
            Box::new(|built| built);
        let reversed = self.inner.transform(identity);
        let built = reversed(P::lmap(arrow, |focus: T| ((), focus)));
        P::rmap(built, |((), focus): (NoIx, A)| focus)
    }
}

impl<R: Clone, S, T, A, B> Clone for ReversedRepr<R, S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<R: fmt::Debug, S, T, A, B> fmt::Debug for ReversedRepr<R, S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReversedRepr")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<K: Reversible, S, T, A, B, R> Optic<K, NoIx, S, T, A, B, R> {
    /// Exchanges structure and focus.
    ///
    /// Only unindexed optics of a reversible kind can be reversed:
    ///
    /// ```compile_fail
    /// use optica::optics::traversed;
    ///
    /// let backwards = traversed::<i32, i32>().re();
    /// ```
    #[must_use]
    pub fn re(self) -> Optic<K::Reversed, NoIx, B, A, T, S, ReversedRepr<R, S, T, A, B>> {
        Optic::new(ReversedRepr {
            inner: self.into_repr(),
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{GetterKind, Kind, ReversedLensKind};
    use crate::optics::{fst, iso, lens, some};
    use rstest::rstest;

    #[test]
    fn test_reversed_lens_reviews_with_the_view() {
        let first = lens(|pair: &(i32, char)| pair.0, |pair: (i32, char), v: i32| (v, pair.1));
        let reversed = first.re();
        assert_eq!(reversed.kind(), ReversedLensKind::TAG);
        assert_eq!(reversed.review((7, 'x')), 7);
    }

    #[rstest]
    #[case(0)]
    #[case(41)]
    fn test_reversed_prism_is_a_getter(#[case] value: i32) {
        let wrap = some::<i32, i32>().re();
        assert!(wrap.kind().is(GetterKind::TAG));
        assert_eq!(wrap.view(value), Some(value));
        assert_eq!(wrap.to_vec(value), vec![Some(value)]);
    }

    #[test]
    fn test_reversed_iso_swaps_directions() {
        let doubled = iso(|n: i32| n * 2, |n: i32| n / 2);
        let halved = doubled.re();
        assert_eq!(halved.view(8), 4);
        assert_eq!(halved.review(4), 8);
    }

    #[test]
    fn test_double_reversal_behaves_like_original() {
        let doubled = iso(|n: i32| n * 2, |n: i32| n / 2);
        let again = doubled.clone().re().re();
        for n in [-3, 0, 5] {
            assert_eq!(again.view(n), doubled.view(n));
            assert_eq!(again.review(n), doubled.review(n));
            assert_eq!(again.over(n, |x| x + 1), doubled.over(n, |x| x + 1));
        }

        let first = fst::<i32, i32, char>();
        let first_again = fst::<i32, i32, char>().re().re();
        assert_eq!(first_again.view((1, 'a')), first.view((1, 'a')));
        assert_eq!(first_again.set((1, 'a'), 9), first.set((1, 'a'), 9));
    }
}
