//! Newtypes selecting a particular monoid.
//!
//! The fold eliminators on [`Optic`](crate::optics::Optic) summarize their
//! foci through a [`Monoid`](super::Monoid). These wrappers pick which one:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`First`]: leftmost present value, identity `First(None)`
//! - [`Last`]: rightmost present value, identity `Last(None)`
//! - [`Any`]: disjunction, identity `false`
//! - [`All`]: conjunction, identity `true`

/// Combines by addition.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Monoid, Sum};
///
/// assert_eq!(Sum::combine_all([Sum(1), Sum(2), Sum(3)]), Sum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Unwraps the total.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Keeps the leftmost present value.
///
/// Folding with `First` is how [`preview`](crate::optics::Optic::preview)
/// picks the first focus of an optic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Unwraps the kept value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> From<A> for First<A> {
    fn from(value: A) -> Self {
        Self(Some(value))
    }
}

/// Keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Last<A>(pub Option<A>);

impl<A> Last<A> {
    /// Unwraps the kept value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> From<A> for Last<A> {
    fn from(value: A) -> Self {
        Self(Some(value))
    }
}

/// `true` when any combined value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any(pub bool);

/// `true` when every combined value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct All(pub bool);

impl Default for All {
    fn default() -> Self {
        Self(true)
    }
}
