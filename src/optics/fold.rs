//! Folds: zero or more foci, read-only.
//!
//! Every fold eliminator visits foci left to right, in the order the
//! structure enumerates them. Running the same fold twice on the same
//! source visits the same foci in the same order.
//!
//! # Examples
//!
//! ```rust
//! use optica::optics::folding;
//!
//! let words = folding(|text: String| {
//!     text.split_whitespace().map(str::to_string).collect::<Vec<_>>()
//! });
//!
//! let sentence = "the quick fox".to_string();
//! assert_eq!(words.to_vec(sentence.clone()), vec!["the", "quick", "fox"]);
//! assert_eq!(words.length(sentence.clone()), 3);
//! assert_eq!(words.last(sentence.clone()), Some("fox".to_string()));
//! assert!(words.exists(sentence, |word| word.starts_with('q')));
//! ```

use std::fmt;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::{FoldKind, Is, Kind};
use crate::profunctor::{Bicontravariant, Forget, Traversing};
use crate::typeclass::{All, Any, First, Last, Monoid, Sum};

/// A fold reading any number of `A`s out of an `S`.
pub type Fold<S, A, R> = Optic<FoldKind, NoIx, S, S, A, A, R>;

/// Representation of [`folding`].
#[derive(Clone, Copy)]
pub struct FoldingRepr<F> {
    function: F,
}

impl<F> fmt::Debug for FoldingRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FoldingRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, F, It> Transform<P, NoIx, S, T, A, B> for FoldingRepr<F>
where
    P: Traversing + Bicontravariant,
    F: Fn(S) -> It,
    It: IntoIterator<Item = A>,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        let every = P::wander(
            P::rphantom::<(NoIx, A), B, ()>(arrow),
            move |source: S| {
                let foci = (self.function)(source)
                    .into_iter()
                    .map(|focus| ((), focus))
                    .collect();
                (foci, ())
            },
            |(), _: Vec<()>| (),
        );
        P::rphantom::<S, (), T>(every)
    }
}

/// Builds a fold from a function listing the foci.
#[must_use]
pub const fn folding<S, A, F, It>(function: F) -> Fold<S, A, FoldingRepr<F>>
where
    F: Fn(S) -> It,
    It: IntoIterator<Item = A>,
{
    Optic::new(FoldingRepr { function })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Collects every focus.
    pub fn to_vec(&self, source: S) -> Vec<A>
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Vec<A>>, I, S, T, A, B>,
    {
        let collect = self.run::<Forget<Vec<A>>>(Box::new(|focus: A| vec![focus]));
        collect(source)
    }

    /// Maps every focus into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::folded;
    /// use optica::typeclass::Sum;
    ///
    /// let total = folded::<i32>().fold_map(vec![1, 2, 3], Sum);
    /// assert_eq!(total, Sum(6));
    /// ```
    pub fn fold_map<M: Monoid>(&self, source: S, function: impl Fn(A) -> M) -> M
    where
        K: Is<FoldKind>,
        R: Transform<Forget<M>, I, S, T, A, B>,
    {
        let summarize = self.run::<Forget<M>>(Box::new(|focus: A| function(focus)));
        summarize(source)
    }

    /// Folds the foci from the left, starting at `initial`.
    pub fn fold<Acc>(&self, source: S, initial: Acc, function: impl FnMut(Acc, A) -> Acc) -> Acc
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Vec<A>>, I, S, T, A, B>,
    {
        self.to_vec(source).into_iter().fold(initial, function)
    }

    /// Counts the foci.
    pub fn length(&self, source: S) -> usize
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Sum<usize>>, I, S, T, A, B>,
    {
        self.fold_map(source, |_| Sum(1)).into_inner()
    }

    /// The leftmost focus.
    pub fn first(&self, source: S) -> Option<A>
    where
        K: Is<FoldKind>,
        R: Transform<Forget<First<A>>, I, S, T, A, B>,
    {
        self.fold_map(source, |focus| First(Some(focus))).into_inner()
    }

    /// The rightmost focus.
    pub fn last(&self, source: S) -> Option<A>
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Last<A>>, I, S, T, A, B>,
    {
        self.fold_map(source, |focus| Last(Some(focus))).into_inner()
    }

    /// Whether some focus satisfies `predicate`. False without foci.
    pub fn exists(&self, source: S, predicate: impl Fn(&A) -> bool) -> bool
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Any>, I, S, T, A, B>,
    {
        self.fold_map(source, |focus| Any(predicate(&focus))).0
    }

    /// Whether every focus satisfies `predicate`. True without foci.
    pub fn for_all(&self, source: S, predicate: impl Fn(&A) -> bool) -> bool
    where
        K: Is<FoldKind>,
        R: Transform<Forget<All>, I, S, T, A, B>,
    {
        self.fold_map(source, |focus| All(predicate(&focus))).0
    }

    /// Whether there are no foci.
    pub fn is_empty(&self, source: S) -> bool
    where
        K: Is<FoldKind>,
        R: Transform<Forget<Any>, I, S, T, A, B>,
    {
        !self.exists(source, |_| true)
    }
}
