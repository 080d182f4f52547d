//! Getters: exactly one focus, read-only.

use std::fmt;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::{GetterKind, Is, Kind};
use crate::profunctor::{Bicontravariant, Forget};

/// A getter reading an `A` out of an `S`.
pub type Getter<S, A, R> = Optic<GetterKind, NoIx, S, S, A, A, R>;

/// Representation of [`to`].
#[derive(Clone, Copy)]
pub struct ToRepr<F> {
    function: F,
}

impl<F> fmt::Debug for ToRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ToRepr").finish_non_exhaustive()
    }
}

impl<P, S, T, A, B, F> Transform<P, NoIx, S, T, A, B> for ToRepr<F>
where
    P: Bicontravariant,
    F: Fn(S) -> A,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::rphantom::<S, B, T>(P::lmap(arrow, move |source: S| {
            ((), (self.function)(source))
        }))
    }
}

/// Builds a getter from a function.
///
/// # Examples
///
/// ```rust
/// use optica::optics::{fst, to};
///
/// let length = to(|text: String| text.len());
/// assert_eq!(length.view("four".to_string()), 4);
///
/// let first_length = fst::<String, String, bool>() % to(|text: String| text.len());
/// assert_eq!(first_length.view(("abc".to_string(), true)), 3);
/// ```
///
/// Getters cannot write:
///
/// ```compile_fail
/// use optica::optics::to;
///
/// let length = to(|text: String| text.len());
/// length.set("four".to_string(), 2);
/// ```
#[must_use]
pub const fn to<S, A, F>(function: F) -> Getter<S, A, ToRepr<F>>
where
    F: Fn(S) -> A,
{
    Optic::new(ToRepr { function })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Reads the single focus.
    ///
    /// Needs an optic that always has exactly one focus: an equality, iso,
    /// lens, getter or reversed prism.
    ///
    /// ```compile_fail
    /// use optica::optics::some;
    ///
    /// let value = some::<i32, i32>().view(Some(1));
    /// ```
    pub fn view(&self, source: S) -> A
    where
        K: Is<GetterKind>,
        R: Transform<Forget<A>, I, S, T, A, B>,
    {
        let getter = self.run::<Forget<A>>(Box::new(|focus: A| focus));
        getter(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    fn test_to_view(#[case] text: &str, #[case] expected: usize) {
        let length = to(|text: String| text.chars().count());
        assert_eq!(length.view(text.to_string()), expected);
    }

    #[test]
    fn test_getter_folds_its_single_focus() {
        let doubled = to(|n: i32| n * 2);
        assert_eq!(doubled.to_vec(4), vec![8]);
        assert_eq!(doubled.preview(4), Some(8));
    }

    #[test]
    fn test_getter_after_getter() {
        let chained = to(|n: i32| n + 1) % to(|n: i32| n * 10);
        assert_eq!(chained.view(1), 20);
    }
}
