//! Affine traversals: at most one focus that can be read and replaced.
//!
//! An affine traversal is what a lens composed with a prism gives: the
//! focus may be missing, and when it is there it can be rewritten without
//! disturbing the rest of the structure.
//!
//! # Laws
//!
//! ```text
//! optic.preview(optic.set(source, value.clone())) is None or Some(value)
//! optic.set(source.clone(), v) == source  when optic.preview(source) == Some(v)
//! optic.set(optic.set(source.clone(), v1), v2.clone()) == optic.set(source, v2)
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Optic, Transform};
use crate::control::Either;
use crate::index::NoIx;
use crate::kind::AffineTraversalKind;
use crate::profunctor::{Choice, Strong};

/// An affine traversal on `S` with at most one focus `A`.
pub type AffineTraversal<S, T, A, B, R> = Optic<AffineTraversalKind, NoIx, S, T, A, B, R>;

/// An affine traversal that does not change types.
pub type SimpleAffineTraversal<S, A, R> = AffineTraversal<S, S, A, A, R>;

/// Representation of [`affine_traversal`], keeping context `C` next to the
/// focus.
pub struct AffineRepr<M, Rb, C> {
    matching: M,
    rebuild: Rb,
    marker: PhantomData<fn() -> C>,
}

impl<M: Clone, Rb: Clone, C> Clone for AffineRepr<M, Rb, C> {
    fn clone(&self) -> Self {
        Self {
            matching: self.matching.clone(),
            rebuild: self.rebuild.clone(),
            marker: PhantomData,
        }
    }
}

impl<M, Rb, C> fmt::Debug for AffineRepr<M, Rb, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AffineRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, C, M, Rb> Transform<P, NoIx, S, T, A, B> for AffineRepr<M, Rb, C>
where
    P: Strong + Choice,
    M: Fn(S) -> Result<(A, C), T>,
    Rb: Fn(C, B) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        let with_context = P::first::<(NoIx, A), B, C>(arrow);
        P::dimap(
            P::right::<((NoIx, A), C), (B, C), T>(with_context),
            move |source: S| match (self.matching)(source) {
                Ok((focus, context)) => Either::Right((((), focus), context)),
                Err(rest) => Either::Left(rest),
            },
            move |result: Either<T, (B, C)>| match result {
                Either::Left(rest) => rest,
                Either::Right((value, context)) => (self.rebuild)(context, value),
            },
        )
    }
}

/// Builds an affine traversal from a matcher and a rebuilder.
///
/// `matching` either finds the focus together with the context needed to
/// put a new focus back, or returns the structure converted to `T`.
///
/// # Examples
///
/// ```rust
/// use optica::optics::affine_traversal;
///
/// let head = affine_traversal(
///     |mut values: Vec<i32>| {
///         if values.is_empty() {
///             Err(values)
///         } else {
///             let head = values.remove(0);
///             Ok((head, values))
///         }
///     },
///     |mut rest: Vec<i32>, head: i32| {
///         rest.insert(0, head);
///         rest
///     },
/// );
///
/// assert_eq!(head.preview(vec![1, 2]), Some(1));
/// assert_eq!(head.set(vec![1, 2], 9), vec![9, 2]);
/// assert_eq!(head.set(vec![], 9), vec![]);
/// ```
#[must_use]
pub const fn affine_traversal<S, T, A, B, C, M, Rb>(
    matching: M,
    rebuild: Rb,
) -> AffineTraversal<S, T, A, B, AffineRepr<M, Rb, C>>
where
    M: Fn(S) -> Result<(A, C), T>,
    Rb: Fn(C, B) -> T,
{
    Optic::new(AffineRepr {
        matching,
        rebuild,
        marker: PhantomData,
    })
}

/// Builds a type-preserving affine traversal from a partial reader and an
/// update function.
///
/// `update` is only called when `preview` found a focus.
///
/// # Examples
///
/// ```rust
/// use optica::optics::simple_affine_traversal;
///
/// let second = simple_affine_traversal(
///     |values: &Vec<char>| values.get(1).copied(),
///     |mut values: Vec<char>, value: char| {
///         values[1] = value;
///         values
///     },
/// );
/// assert_eq!(second.over(vec!['a', 'b'], |c| c.to_ascii_uppercase()), vec!['a', 'B']);
/// assert_eq!(second.over(vec!['a'], |c| c.to_ascii_uppercase()), vec!['a']);
/// ```
pub fn simple_affine_traversal<S, A>(
    preview: impl Fn(&S) -> Option<A>,
    update: impl Fn(S, A) -> S,
) -> SimpleAffineTraversal<S, A, AffineRepr<impl Fn(S) -> Result<(A, S), S>, impl Fn(S, A) -> S, S>>
{
    affine_traversal(
        move |source: S| match preview(&source) {
            Some(focus) => Ok((focus, source)),
            None => Err(source),
        },
        update,
    )
}

/// Representation of [`filtered`].
#[derive(Clone, Copy)]
pub struct FilteredRepr<F> {
    predicate: F,
}

impl<F> fmt::Debug for FilteredRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FilteredRepr").finish_non_exhaustive()
    }
}

impl<P, A, F> Transform<P, NoIx, A, A, A, A> for FilteredRepr<F>
where
    P: Choice,
    F: Fn(&A) -> bool,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), A>) -> P::Arrow<'a, A, A>
    where
        P: 'a,
        A: 'a,
    {
        P::dimap(
            P::right::<(NoIx, A), A, A>(arrow),
            move |value: A| {
                if (self.predicate)(&value) {
                    Either::Right(((), value))
                } else {
                    Either::Left(value)
                }
            },
            Either::into_inner,
        )
    }
}

/// Focuses on the value itself when it satisfies `predicate`.
///
/// This is only a lawful affine traversal as long as updates keep the
/// predicate true; an update that breaks it makes the focus disappear.
///
/// # Examples
///
/// ```rust
/// use optica::optics::{filtered, traversed};
///
/// let evens = traversed::<i32, i32>() % filtered(|n: &i32| n % 2 == 0);
/// assert_eq!(evens.to_vec(vec![1, 2, 3, 4]), vec![2, 4]);
/// assert_eq!(evens.over(vec![1, 2, 3, 4], |n| n * 10), vec![1, 20, 3, 40]);
/// ```
#[must_use]
pub const fn filtered<A, F>(predicate: F) -> SimpleAffineTraversal<A, A, FilteredRepr<F>>
where
    F: Fn(&A) -> bool,
{
    Optic::new(FilteredRepr { predicate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{AffineTraversalKind, Kind};
    use crate::optics::{fst, some};
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(11))]
    #[case(None, None)]
    fn test_lens_then_prism_over(#[case] head: Option<i32>, #[case] expected: Option<i32>) {
        let inner = fst::<Option<i32>, Option<i32>, &str>() % some::<i32, i32>();
        assert_eq!(inner.kind(), AffineTraversalKind::TAG);
        assert_eq!(inner.over((head, "tail"), |n| n + 10), (expected, "tail"));
    }

    #[test]
    fn test_filtered_preview() {
        let positive = filtered(|n: &i32| *n > 0);
        assert_eq!(positive.preview(3), Some(3));
        assert_eq!(positive.preview(-3), None);
        assert_eq!(positive.set(-3, 5), -3);
    }

    #[test]
    fn test_simple_affine_traversal_set_is_idempotent() {
        let last = simple_affine_traversal(
            |values: &Vec<i32>| values.last().copied(),
            |mut values: Vec<i32>, value| {
                if let Some(slot) = values.last_mut() {
                    *slot = value;
                }
                values
            },
        );
        let once = last.set(vec![1, 2], 7);
        assert_eq!(last.set(once.clone(), 7), once);
        assert_eq!(once, vec![1, 7]);
    }
}
