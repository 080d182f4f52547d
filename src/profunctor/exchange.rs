//! Profunctors that take an optic apart into the functions it was built from.

use std::marker::PhantomData;
use std::rc::Rc;

use super::{Choice, Profunctor};
use crate::control::Either;

/// Recovers the two directions of an iso.
///
/// An arrow from `S` to `T` is the pair `(S -> A, B -> T)`. Running an iso
/// at `Exchange<A, B>` on the identity pair yields the iso's own forward and
/// backward functions.
pub struct Exchange<A, B>(PhantomData<fn(B) -> A>);

impl<A0, B0> Profunctor for Exchange<A0, B0> {
    type Arrow<'a, S: 'a, T: 'a>
        = (Box<dyn Fn(S) -> A0 + 'a>, Box<dyn Fn(B0) -> T + 'a>)
    where
        Self: 'a;

    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        (forward, backward): Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        (
            Box::new(move |source: S| forward(before(source))),
            Box::new(move |value: B0| after(backward(value))),
        )
    }
}

/// Recovers the builder and the matcher of a prism.
///
/// An arrow from `S` to `T` is the pair `(B -> T, S -> Either<T, A>)`.
pub struct Market<A, B>(PhantomData<fn(B) -> A>);

impl<A0, B0> Profunctor for Market<A0, B0> {
    type Arrow<'a, S: 'a, T: 'a>
        = (Box<dyn Fn(B0) -> T + 'a>, Box<dyn Fn(S) -> Either<T, A0> + 'a>)
    where
        Self: 'a;

    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        (build, matching): Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        let after = Rc::new(after);
        let after_build = Rc::clone(&after);
        (
            Box::new(move |value: B0| after_build(build(value))),
            Box::new(move |source: S| matching(before(source)).map_left(|rest| after(rest))),
        )
    }
}

impl<A0, B0> Choice for Market<A0, B0> {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        (build, matching): Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        (
            Box::new(move |value: B0| Either::Left(build(value))),
            Box::new(move |source: Either<A, C>| match source {
                Either::Left(inner) => matching(inner).map_left(Either::Left),
                Either::Right(other) => Either::Left(Either::Right(other)),
            }),
        )
    }
}
