//! Reviews: building a structure from a focus.

use std::fmt;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::{Is, Kind, ReviewKind};
use crate::profunctor::{Bifunctor, Tagged};

/// A review building a `T` from a `B`.
pub type Review<T, B, R> = Optic<ReviewKind, NoIx, T, T, B, B, R>;

/// Representation of [`unto`].
#[derive(Clone, Copy)]
pub struct UntoRepr<F> {
    build: F,
}

impl<F> fmt::Debug for UntoRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("UntoRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, F> Transform<P, NoIx, S, T, A, B> for UntoRepr<F>
where
    P: Bifunctor,
    F: Fn(B) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::lphantom::<(NoIx, A), T, S>(P::rmap(arrow, move |value: B| (self.build)(value)))
    }
}

/// Builds a review from a constructor.
///
/// # Examples
///
/// ```rust
/// use optica::optics::{some, unto};
///
/// let boxed = unto(|n: i32| vec![n]);
/// assert_eq!(boxed.review(3), vec![3]);
///
/// let nested = some::<Vec<i32>, Vec<i32>>() % unto(|n: i32| vec![n]);
/// assert_eq!(nested.review(1), Some(vec![1]));
/// ```
#[must_use]
pub const fn unto<T, B, F>(build: F) -> Review<T, B, UntoRepr<F>>
where
    F: Fn(B) -> T,
{
    Optic::new(UntoRepr { build })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Builds a structure from a focus.
    ///
    /// Available on isos, prisms, reversed lenses and reviews. A lens cannot
    /// build:
    ///
    /// ```compile_fail
    /// use optica::optics::fst;
    ///
    /// let built = fst::<i32, i32, char>().review(1);
    /// ```
    pub fn review(&self, value: B) -> T
    where
        K: Is<ReviewKind>,
        R: Transform<Tagged, I, S, T, A, B>,
    {
        self.run::<Tagged>(value)
    }
}
