//! Building through an optic.

use super::{Bifunctor, Choice, Costrong, Profunctor};
use crate::control::Either;

/// The build-only profunctor: an arrow from `A` to `B` is just a `B`.
///
/// Running an optic at `Tagged` turns a focus value into a whole structure,
/// which is how [`review`](crate::optics::Optic::review) works.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tagged;

impl Profunctor for Tagged {
    type Arrow<'a, A: 'a, B: 'a>
        = B
    where
        Self: 'a;

    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        _before: impl Fn(S) -> A + 'a,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        after(arrow)
    }
}

impl Choice for Tagged {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        Either::Left(arrow)
    }
}

impl Costrong for Tagged {
    fn unfirst<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, (A, C), (B, C)>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        arrow.0
    }
}

impl Bifunctor for Tagged {
    fn lphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, C, B>
    where
        Self: 'a,
    {
        arrow
    }
}
