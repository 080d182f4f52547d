//! Effectful arrows.

use std::marker::PhantomData;

use super::{Choice, Profunctor, Strong, Traversing};
use crate::control::Either;
use crate::typeclass::Applicative;

/// Arrows `A -> F::Apply<B>` for an applicative effect `F`.
///
/// Running a traversal at `Star<F>` visits every focus with an effectful
/// function and sequences the effects left to right. With
/// [`OptionEffect`](crate::typeclass::OptionEffect) the result is `None`
/// when any focus fails. The function still runs on every focus.
pub struct Star<F>(PhantomData<fn() -> F>);

impl<F: Applicative> Profunctor for Star<F> {
    type Arrow<'a, A: 'a, B: 'a>
        = Box<dyn Fn(A) -> F::Apply<B> + 'a>
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
        Box::new(move |source: S| F::fmap(arrow(before(source)), |output| after(output)))
    }
}

impl<F: Applicative> Strong for Star<F> {
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a,
    {
        Box::new(move |(input, context): (A, C)| {
            F::fmap(arrow(input), move |output| (output, context))
        })
    }
}

impl<F: Applicative> Choice for Star<F> {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        Box::new(move |input: Either<A, C>| match input {
            Either::Left(focus) => F::fmap(arrow(focus), Either::Left),
            Either::Right(other) => F::pure(Either::Right(other)),
        })
    }
}

impl<F: Applicative> Traversing for Star<F> {
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
            let effects = foci.into_iter().map(|focus| arrow(focus)).collect();
            F::fmap(F::sequence(effects), |outputs| rebuild(context, outputs))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OptionEffect;
    use std::cell::Cell;

    #[test]
    fn test_wander_visits_every_focus_before_failing() {
        let visited = Cell::new(0);
        let arrow: Box<dyn Fn(i32) -> Option<i32>> = Box::new(|value| {
            visited.set(visited.get() + 1);
            (value > 0).then_some(value)
        });
        let lifted = Star::<OptionEffect>::wander(
            arrow,
            |values: Vec<i32>| (values, ()),
            |(), values: Vec<i32>| values,
        );
        assert_eq!(lifted(vec![1, -2, 3]), None);
        assert_eq!(visited.get(), 3);
        assert_eq!(lifted(vec![1, 2]), Some(vec![1, 2]));
    }
}
