//! Setters: write-only optics.
//!
//! A setter can change every focus but cannot report what they are. Any
//! optic that can write is usable as a setter.
//!
//! # Laws
//!
//! ```text
//! setter.over(source.clone(), |x| x) == source
//! setter.over(setter.over(source.clone(), f), g) == setter.over(source, |x| g(f(x)))
//! ```
//!
//! A pure setter rejects every read at compile time:
//!
//! ```compile_fail
//! use optica::optics::mapped;
//!
//! let values = mapped::<i32, i32>().to_vec(vec![1, 2]);
//! ```

use std::fmt;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::{Is, Kind, SetterKind};
use crate::profunctor::{FunArrow, Mapping};

/// A setter on `S` with foci `A`.
pub type Setter<S, T, A, B, R> = Optic<SetterKind, NoIx, S, T, A, B, R>;

/// Representation of [`sets`].
#[derive(Clone, Copy)]
pub struct SetsRepr<F> {
    mapper: F,
}

impl<F> fmt::Debug for SetsRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SetsRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, F> Transform<P, NoIx, S, T, A, B> for SetsRepr<F>
where
    P: Mapping,
    F: Fn(&dyn Fn(A) -> B, S) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::roam(arrow, move |function: &dyn Fn((NoIx, A)) -> B, source: S| {
            (self.mapper)(&|focus: A| function(((), focus)), source)
        })
    }
}

/// Builds a setter from a function that maps every focus.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use optica::optics::sets;
///
/// let values = sets(
///     |function: &dyn Fn(i32) -> i32, map: BTreeMap<char, i32>| -> BTreeMap<char, i32> {
///         map.into_iter().map(|(key, value)| (key, function(value))).collect()
///     },
/// );
///
/// let map = BTreeMap::from([('a', 1), ('b', 2)]);
/// let doubled = values.over(map, |n| n * 2);
/// assert_eq!(doubled.get(&'b'), Some(&4));
/// ```
#[must_use]
pub const fn sets<S, T, A, B, F>(mapper: F) -> Setter<S, T, A, B, SetsRepr<F>>
where
    F: Fn(&dyn Fn(A) -> B, S) -> T,
{
    Optic::new(SetsRepr { mapper })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Applies `function` to every focus.
    pub fn over(&self, source: S, function: impl Fn(A) -> B) -> T
    where
        K: Is<SetterKind>,
        R: Transform<FunArrow, I, S, T, A, B>,
    {
        let modify = self.run::<FunArrow>(Box::new(|focus: A| function(focus)));
        modify(source)
    }

    /// Replaces every focus with `value`.
    pub fn set(&self, source: S, value: B) -> T
    where
        K: Is<SetterKind>,
        R: Transform<FunArrow, I, S, T, A, B>,
        B: Clone,
    {
        self.over(source, |_| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{fst, mapped};

    #[test]
    fn test_sets_over_option_contents() {
        let inside =
            sets(|function: &dyn Fn(i32) -> String, source: Option<i32>| source.map(function));
        assert_eq!(inside.over(Some(3), |n| n.to_string()), Some("3".to_string()));
        assert_eq!(inside.over(None, |n| n.to_string()), None);
    }

    #[test]
    fn test_setter_after_lens() {
        let firsts = mapped::<(i32, char), (i32, char)>() % fst::<i32, i32, char>();
        assert_eq!(firsts.set(vec![(1, 'a'), (2, 'b')], 0), vec![(0, 'a'), (0, 'b')]);
    }
}
