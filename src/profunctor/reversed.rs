//! Running an optic backwards.

use std::marker::PhantomData;

use super::{Bicontravariant, Bifunctor, Choice, Cochoice, Costrong, Profunctor, Strong};
use crate::control::Either;

/// `P` with the roles of input and output exchanged.
///
/// An arrow from `A` to `B` is a continuation that, given `P`'s arrow from
/// `B` to `A`, produces `P`'s arrow from `T` to `S`. Every capability of
/// `Reversed<P, S, T>` is the dual capability of `P`: it is [`Strong`] when
/// `P` is [`Costrong`], [`Choice`] when `P` is [`Cochoice`],
/// [`Bicontravariant`] when `P` is a [`Bifunctor`], and the other way round.
pub struct Reversed<P, S, T>(PhantomData<fn() -> (P, S, T)>);

impl<P: Profunctor, S0, T0> Profunctor for Reversed<P, S0, T0> {
    type Arrow<'a, A: 'a, B: 'a>
        = Box<dyn FnOnce(P::Arrow<'a, B, A>) -> P::Arrow<'a, T0, S0> + 'a>
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
        Box::new(move |inner: P::Arrow<'a, T, S>| arrow(P::dimap(inner, after, before)))
    }
}

impl<P: Costrong, S0, T0> Strong for Reversed<P, S0, T0> {
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, (B, C), (A, C)>| arrow(P::unfirst::<B, A, C>(inner)))
    }
}

impl<P: Strong, S0, T0> Costrong for Reversed<P, S0, T0> {
    fn unfirst<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, (A, C), (B, C)>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, B, A>| arrow(P::first::<B, A, C>(inner)))
    }
}

impl<P: Cochoice, S0, T0> Choice for Reversed<P, S0, T0> {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, Either<B, C>, Either<A, C>>| {
            arrow(P::unleft::<B, A, C>(inner))
        })
    }
}

impl<P: Choice, S0, T0> Cochoice for Reversed<P, S0, T0> {
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, B, A>| arrow(P::left::<B, A, C>(inner)))
    }
}

impl<P: Bifunctor, S0, T0> Bicontravariant for Reversed<P, S0, T0> {
    fn rphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, A, C>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, C, A>| arrow(P::lphantom::<C, A, B>(inner)))
    }
}

impl<P: Bicontravariant, S0, T0> Bifunctor for Reversed<P, S0, T0> {
    fn lphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, C, B>
    where
        Self: 'a,
    {
        Box::new(move |inner: P::Arrow<'a, B, C>| arrow(P::rphantom::<B, C, A>(inner)))
    }
}
