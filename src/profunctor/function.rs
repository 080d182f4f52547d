//! Plain functions as a profunctor.

use super::{Choice, Mapping, Profunctor, Strong, Traversing};
use crate::control::Either;

/// The function profunctor: an arrow is a boxed `Fn(A) -> B`.
///
/// Running an optic at `FunArrow` modifies every focus, which is how
/// [`over`](crate::optics::Optic::over) and
/// [`set`](crate::optics::Optic::set) work.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunArrow;

impl Profunctor for FunArrow {
    type Arrow<'a, A: 'a, B: 'a>
        = Box<dyn Fn(A) -> B + 'a>
    where
        Self: 'a;

    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        Box::new(move |source: S| after(arrow(before(source))))
    }
}

impl Strong for FunArrow {
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a,
    {
        Box::new(move |(input, context): (A, C)| (arrow(input), context))
    }
}

impl Choice for FunArrow {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        Box::new(move |input: Either<A, C>| input.map_left(|focus| arrow(focus)))
    }
}

impl Traversing for FunArrow {
    fn wander<'a, S: 'a, T: 'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        split: impl Fn(S) -> (Vec<A>, C) + 'a,
        rebuild: impl Fn(C, Vec<B>) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        Box::new(move |source: S| {
            let (foci, context) = split(source);
            rebuild(context, foci.into_iter().map(|focus| arrow(focus)).collect())
        })
    }
}

impl Mapping for FunArrow {
    fn roam<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        mapper: impl Fn(&dyn Fn(A) -> B, S) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        Box::new(move |source: S| mapper(&*arrow, source))
    }
}
