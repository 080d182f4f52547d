//! Threading an index through another profunctor.

use std::marker::PhantomData;

use super::{
    Bicontravariant, Bifunctor, Choice, Cochoice, Costrong, Forget, Mapping, Profunctor, Reversed,
    Strong, Traversing,
};
use crate::control::Either;

/// `P`-arrows that also receive an index of type `I` next to their input.
///
/// `WithIndex<P, I>`'s arrow from `A` to `B` is `P`'s arrow from `(I, A)` to
/// `B`. Composition runs the inner optic at `WithIndex<P, I>` so the indices
/// collected by the outer optic reach every inner focus.
pub struct WithIndex<P, I>(PhantomData<fn() -> (P, I)>);

impl<P: Profunctor, I> Profunctor for WithIndex<P, I> {
    type Arrow<'a, A: 'a, B: 'a>
        = P::Arrow<'a, (I, A), B>
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
        P::dimap(
            arrow,
            move |(index, source): (I, S)| (index, before(source)),
            after,
        )
    }
}

impl<P: Strong, I> Strong for WithIndex<P, I> {
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a,
    {
        P::lmap(
            P::first::<(I, A), B, C>(arrow),
            |(index, (input, context)): (I, (A, C))| ((index, input), context),
        )
    }
}

impl<P: Choice, I> Choice for WithIndex<P, I> {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        P::lmap(
            P::left::<(I, A), B, C>(arrow),
            |(index, input): (I, Either<A, C>)| input.map_left(|focus| (index, focus)),
        )
    }
}

impl<P: Traversing, I: Clone> Traversing for WithIndex<P, I> {
    fn wander<'a, S: 'a, T: 'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        split: impl Fn(S) -> (Vec<A>, C) + 'a,
        rebuild: impl Fn(C, Vec<B>) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        P::wander(
            arrow,
            move |(index, source): (I, S)| {
                let (foci, context) = split(source);
                let indexed = foci
                    .into_iter()
                    .map(|focus| (index.clone(), focus))
                    .collect();
                (indexed, context)
            },
            rebuild,
        )
    }
}

impl<P: Mapping, I: Clone> Mapping for WithIndex<P, I> {
    fn roam<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        mapper: impl Fn(&dyn Fn(A) -> B, S) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        P::roam(
            arrow,
            move |function: &dyn Fn((I, A)) -> B, (index, source): (I, S)| {
                mapper(&|focus: A| function((index.clone(), focus)), source)
            },
        )
    }
}

impl<P: Bicontravariant, I> Bicontravariant for WithIndex<P, I> {
    fn rphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, A, C>
    where
        Self: 'a,
    {
        P::rphantom::<(I, A), B, C>(arrow)
    }
}

impl<P: Costrong, I> Costrong for WithIndex<P, I> {
    fn unfirst<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, (A, C), (B, C)>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        P::unfirst::<(I, A), B, C>(P::lmap(
            arrow,
            |((index, input), context): ((I, A), C)| (index, (input, context)),
        ))
    }
}

// Reading never produces the right branch, so the index can ride along
// with the left one whatever the index list is.
impl<R, I> Cochoice for WithIndex<Forget<R>, I> {
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        Box::new(move |(index, input): (I, A)| arrow((index, Either::Left(input))))
    }
}

// A profunctor that does produce outputs gets its right branch back without
// an index, so only the empty index list can be fed back.
fn unleft_unindexed<'a, P, A: 'a, B: 'a, C: 'a>(
    arrow: P::Arrow<'a, ((), Either<A, C>), Either<B, C>>,
) -> P::Arrow<'a, ((), A), B>
where
    P: Cochoice + 'a,
{
    P::lmap(
        P::unleft::<A, B, C>(P::lmap(arrow, |input: Either<A, C>| ((), input))),
        |((), input): ((), A)| input,
    )
}

impl<P: Choice, S, T> Cochoice for WithIndex<Reversed<P, S, T>, ()> {
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        unleft_unindexed::<Reversed<P, S, T>, A, B, C>(arrow)
    }
}

impl<P, J> Cochoice for WithIndex<WithIndex<P, J>, ()>
where
    WithIndex<P, J>: Cochoice,
{
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        unleft_unindexed::<WithIndex<P, J>, A, B, C>(arrow)
    }
}

impl<P: Bifunctor, I> Bifunctor for WithIndex<P, I> {
    fn lphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, C, B>
    where
        Self: 'a,
    {
        P::lphantom::<(I, A), B, (I, C)>(arrow)
    }
}
