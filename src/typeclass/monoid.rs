//! Semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! A fold over an optic with no foci produces [`Monoid::empty`]; this is how
//! an unmatched prism or an empty traversal reads as "nothing".

use std::ops::Add;

use super::Semigroup;
use super::wrappers::{All, Any, First, Last, Sum};

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Monoid;
///
/// assert_eq!(Vec::<i32>::combine_all([vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
/// assert_eq!(String::empty(), "");
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every element, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}
