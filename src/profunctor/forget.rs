//! Reading through an optic.

use std::marker::PhantomData;

use super::{Bicontravariant, Choice, Cochoice, Profunctor, Strong, Traversing};
use crate::control::Either;
use crate::typeclass::Monoid;

/// The read-only profunctor: an arrow from `A` to `B` is a function
/// `A -> R` and `B` is never produced.
///
/// Running an optic at `Forget<R>` extracts a summary of type `R` from the
/// structure. Single-focus kinds need nothing from `R`; kinds that may see
/// zero or many foci combine the results with `R`'s [`Monoid`] instance, in
/// focus order.
pub struct Forget<R>(PhantomData<fn() -> R>);

impl<R> Profunctor for Forget<R> {
    type Arrow<'a, A: 'a, B: 'a>
        = Box<dyn Fn(A) -> R + 'a>
    where
        Self: 'a;

    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
        _after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        Box::new(move |source: S| arrow(before(source)))
    }
}

impl<R> Strong for Forget<R> {
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a,
    {
        Box::new(move |(input, _): (A, C)| arrow(input))
    }
}

impl<R: Monoid> Choice for Forget<R> {
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a,
    {
        Box::new(move |input: Either<A, C>| match input {
            Either::Left(focus) => arrow(focus),
            Either::Right(_) => R::empty(),
        })
    }
}

impl<R> Cochoice for Forget<R> {
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a,
    {
        Box::new(move |input: A| arrow(Either::Left(input)))
    }
}

impl<R: Monoid> Traversing for Forget<R> {
    fn wander<'a, S: 'a, T: 'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        split: impl Fn(S) -> (Vec<A>, C) + 'a,
        _rebuild: impl Fn(C, Vec<B>) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a,
    {
        Box::new(move |source: S| {
            let (foci, _) = split(source);
            R::combine_all(foci.into_iter().map(|focus| arrow(focus)))
        })
    }
}

impl<R> Bicontravariant for Forget<R> {
    fn rphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, A, C>
    where
        Self: 'a,
    {
        arrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;

    #[test]
    fn test_choice_yields_empty_on_other_branch() {
        let arrow: Box<dyn Fn(i32) -> Vec<i32>> = Box::new(|value| vec![value]);
        let lifted = Forget::<Vec<i32>>::left::<i32, (), &str>(arrow);
        assert_eq!(lifted(Either::Left(4)), vec![4]);
        assert!(lifted(Either::Right("skip")).is_empty());
    }

    #[test]
    fn test_wander_combines_in_focus_order() {
        let arrow: Box<dyn Fn(u32) -> Sum<u32>> = Box::new(Sum);
        let lifted = Forget::<Sum<u32>>::wander(
            arrow,
            |values: Vec<u32>| (values, ()),
            |(), _: Vec<()>| (),
        );
        assert_eq!(lifted(vec![1, 2, 3]), Sum(6));
    }
}
