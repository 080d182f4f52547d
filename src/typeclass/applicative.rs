//! Applicative effects for effectful traversals.
//!
//! [`Optic::traverse`](crate::optics::Optic::traverse) runs a function that
//! returns an effectful value for every focus and sequences the results.
//! The effect is named by a marker type implementing [`Applicative`]; the
//! marker's [`Apply`](Applicative::Apply) constructor is the effectful type
//! itself.
//!
//! | Marker | `Apply<A>` | Behavior |
//! |---|---|---|
//! | [`IdentityEffect`] | `A` | no effect |
//! | [`OptionEffect`] | `Option<A>` | fails on the first `None` |
//! | [`ResultEffect<E>`] | `Result<A, E>` | stops at the first `Err` |
//!
//! # Laws
//!
//! ```text
//! map2(pure(a), pure(b), f) == pure(f(a, b))
//! fmap(pure(a), f) == pure(f(a))
//! ```

use std::marker::PhantomData;

/// An applicative effect, given by its type constructor.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Applicative, OptionEffect};
///
/// let all = OptionEffect::sequence(vec![Some(1), Some(2)]);
/// assert_eq!(all, Some(vec![1, 2]));
///
/// let failed = OptionEffect::sequence(vec![Some(1), None]);
/// assert_eq!(failed, None);
/// ```
pub trait Applicative {
    /// The effectful type carrying an `A`.
    type Apply<A>;

    /// Lifts a plain value.
    fn pure<A>(value: A) -> Self::Apply<A>;

    /// Maps the carried value.
    fn fmap<A, B>(effect: Self::Apply<A>, function: impl FnOnce(A) -> B) -> Self::Apply<B>;

    /// Combines two independent effects.
    fn map2<A, B, C>(
        first: Self::Apply<A>,
        second: Self::Apply<B>,
        function: impl FnOnce(A, B) -> C,
    ) -> Self::Apply<C>;

    /// Runs effects left to right and collects their values.
    fn sequence<A>(effects: Vec<Self::Apply<A>>) -> Self::Apply<Vec<A>> {
        let capacity = effects.len();
        effects.into_iter().fold(
            Self::pure(Vec::with_capacity(capacity)),
            |accumulated, effect| {
                Self::map2(accumulated, effect, |mut values, value| {
                    values.push(value);
                    values
                })
            },
        )
    }
}

/// No effect at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEffect;

impl Applicative for IdentityEffect {
    type Apply<A> = A;

    #[inline]
    fn pure<A>(value: A) -> A {
        value
    }

    #[inline]
    fn fmap<A, B>(effect: A, function: impl FnOnce(A) -> B) -> B {
        function(effect)
    }

    #[inline]
    fn map2<A, B, C>(first: A, second: B, function: impl FnOnce(A, B) -> C) -> C {
        function(first, second)
    }
}

/// Partiality: the result is `None` as soon as one step is.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionEffect;

impl Applicative for OptionEffect {
    type Apply<A> = Option<A>;

    #[inline]
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn fmap<A, B>(effect: Option<A>, function: impl FnOnce(A) -> B) -> Option<B> {
        effect.map(function)
    }

    #[inline]
    fn map2<A, B, C>(
        first: Option<A>,
        second: Option<B>,
        function: impl FnOnce(A, B) -> C,
    ) -> Option<C> {
        match (first, second) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }
}

/// Failure with an error value: the first `Err` wins.
pub struct ResultEffect<E>(PhantomData<fn() -> E>);

impl<E> Applicative for ResultEffect<E> {
    type Apply<A> = Result<A, E>;

    #[inline]
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline]
    fn fmap<A, B>(effect: Result<A, E>, function: impl FnOnce(A) -> B) -> Result<B, E> {
        effect.map(function)
    }

    #[inline]
    fn map2<A, B, C>(
        first: Result<A, E>,
        second: Result<B, E>,
        function: impl FnOnce(A, B) -> C,
    ) -> Result<C, E> {
        Ok(function(first?, second?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_sequence_reports_first_error() {
        let effects: Vec<Result<i32, &str>> = vec![Ok(1), Err("second"), Err("third")];
        assert_eq!(ResultEffect::<&str>::sequence(effects), Err("second"));
    }

    #[test]
    fn test_identity_sequence_keeps_order() {
        assert_eq!(IdentityEffect::sequence(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_option_map2() {
        assert_eq!(OptionEffect::map2(Some(2), Some(3), |a, b| a * b), Some(6));
        assert_eq!(OptionEffect::map2(Some(2), None::<i32>, |a, b| a * b), None);
    }
}
