//! Traversals: zero or more foci that can be read and replaced.
//!
//! # Laws
//!
//! 1. **Identity**: traversing with the identity changes nothing.
//!    ```text
//!    traversal.over(source.clone(), |x| x) == source
//!    ```
//! 2. **Composition**: two passes equal one pass with the composed function.
//!    ```text
//!    traversal.over(traversal.over(source.clone(), f), g) == traversal.over(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```rust
//! use optica::optics::{snd, traversed};
//! use optica::typeclass::OptionEffect;
//!
//! let scores = traversed::<(String, u32), (String, u32)>() % snd::<u32, u32, String>();
//! let table = vec![("a".to_string(), 1), ("b".to_string(), 2)];
//!
//! assert_eq!(scores.to_vec(table.clone()), vec![1, 2]);
//! assert_eq!(
//!     scores.over(table.clone(), |score| score * 10),
//!     vec![("a".to_string(), 10), ("b".to_string(), 20)]
//! );
//! assert_eq!(
//!     scores.traverse::<OptionEffect>(table, |score| score.checked_sub(2)),
//!     None
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::{Is, Kind, TraversalKind};
use crate::profunctor::{Star, Traversing};
use crate::typeclass::Applicative;

/// A traversal on `S` with foci `A`.
pub type Traversal<S, T, A, B, R> = Optic<TraversalKind, NoIx, S, T, A, B, R>;

/// A traversal that does not change types.
pub type SimpleTraversal<S, A, R> = Traversal<S, S, A, A, R>;

/// Representation of [`traversal`], splitting into foci and a context `C`.
pub struct TraversalRepr<Sp, Rb, C> {
    split: Sp,
    rebuild: Rb,
    marker: PhantomData<fn() -> C>,
}

impl<Sp: Clone, Rb: Clone, C> Clone for TraversalRepr<Sp, Rb, C> {
    fn clone(&self) -> Self {
        Self {
            split: self.split.clone(),
            rebuild: self.rebuild.clone(),
            marker: PhantomData,
        }
    }
}

impl<Sp, Rb, C> fmt::Debug for TraversalRepr<Sp, Rb, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TraversalRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, C, Sp, Rb> Transform<P, NoIx, S, T, A, B> for TraversalRepr<Sp, Rb, C>
where
    P: Traversing,
    Sp: Fn(S) -> (Vec<A>, C),
    Rb: Fn(C, Vec<B>) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::wander(
            arrow,
            move |source: S| {
                let (foci, context) = (self.split)(source);
                (foci.into_iter().map(|focus| ((), focus)).collect(), context)
            },
            move |context: C, values: Vec<B>| (self.rebuild)(context, values),
        )
    }
}

/// Builds a traversal from a split and a rebuild function.
///
/// `split` takes the structure apart into its foci, in order, and whatever
/// else is needed to put it back together. `rebuild` receives that context
/// and exactly as many new foci as `split` produced.
///
/// # Examples
///
/// ```rust
/// use optica::optics::traversal;
///
/// let both = traversal(
///     |(x, y): (i32, i32)| (vec![x, y], ()),
///     |(), values: Vec<i64>| (values[0], values[1]),
/// );
/// assert_eq!(both.over((1, 2), |n| i64::from(n) * 100), (100, 200));
/// ```
#[must_use]
pub const fn traversal<S, T, A, B, C, Sp, Rb>(
    split: Sp,
    rebuild: Rb,
) -> Traversal<S, T, A, B, TraversalRepr<Sp, Rb, C>>
where
    Sp: Fn(S) -> (Vec<A>, C),
    Rb: Fn(C, Vec<B>) -> T,
{
    Optic::new(TraversalRepr {
        split,
        rebuild,
        marker: PhantomData,
    })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Runs an effectful function on every focus, left to right, and
    /// rebuilds the structure inside the effect.
    ///
    /// The effect is chosen with a marker type: [`OptionEffect`] stops at the
    /// first `None`, [`ResultEffect`] at the first `Err`.
    ///
    /// [`OptionEffect`]: crate::typeclass::OptionEffect
    /// [`ResultEffect`]: crate::typeclass::ResultEffect
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::traversed;
    /// use optica::typeclass::ResultEffect;
    ///
    /// let parse_all = |texts: Vec<&str>| {
    ///     traversed::<&str, i32>()
    ///         .traverse::<ResultEffect<String>>(texts, |text| {
    ///             text.parse::<i32>().map_err(|_| format!("bad: {text}"))
    ///         })
    /// };
    /// assert_eq!(parse_all(vec!["1", "2"]), Ok(vec![1, 2]));
    /// assert_eq!(parse_all(vec!["1", "x", "y"]), Err("bad: x".to_string()));
    /// ```
    pub fn traverse<F: Applicative>(
        &self,
        source: S,
        function: impl Fn(A) -> F::Apply<B>,
    ) -> F::Apply<T>
    where
        K: Is<TraversalKind>,
        R: Transform<Star<F>, I, S, T, A, B>,
    {
        let effectful = self.run::<Star<F>>(Box::new(|focus: A| function(focus)));
        effectful(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{IdentityEffect, OptionEffect};
    use rstest::rstest;

    type PairSplit = fn((i32, i32)) -> (Vec<i32>, ());
    type PairRebuild = fn((), Vec<i32>) -> (i32, i32);

    fn split_pair((x, y): (i32, i32)) -> (Vec<i32>, ()) {
        (vec![x, y], ())
    }

    fn rebuild_pair((): (), values: Vec<i32>) -> (i32, i32) {
        (values[0], values[1])
    }

    fn pair_items() -> SimpleTraversal<(i32, i32), i32, TraversalRepr<PairSplit, PairRebuild, ()>> {
        traversal(split_pair as PairSplit, rebuild_pair as PairRebuild)
    }

    #[rstest]
    #[case((1, 2), Some((2, 3)))]
    #[case((0, 2), None)]
    fn test_traverse_option(#[case] source: (i32, i32), #[case] expected: Option<(i32, i32)>) {
        let result = pair_items().traverse::<OptionEffect>(source, |n| {
            if n == 0 { None } else { Some(n + 1) }
        });
        assert_eq!(result, expected);
    }

    #[test]
    fn test_traverse_identity_is_over() {
        let items = pair_items();
        assert_eq!(
            items.traverse::<IdentityEffect>((3, 4), |n| n * 2),
            items.over((3, 4), |n| n * 2)
        );
    }

    #[test]
    fn test_traversal_laws() {
        let items = pair_items();
        assert_eq!(items.over((5, 6), |n| n), (5, 6));
        assert_eq!(
            items.over(items.over((5, 6), |n| n + 1), |n| n * 2),
            items.over((5, 6), |n| (n + 1) * 2)
        );
    }

    #[test]
    fn test_traverse_visits_left_to_right() {
        let visited = std::cell::RefCell::new(Vec::new());
        let _ = pair_items().traverse::<IdentityEffect>((8, 9), |n| {
            visited.borrow_mut().push(n);
            n
        });
        assert_eq!(visited.into_inner(), vec![8, 9]);
    }
}
