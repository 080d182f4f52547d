//! The single optic carrier type.

use std::fmt;
use std::marker::PhantomData;

use crate::kind::{Is, Kind, KindTag};
use crate::profunctor::Profunctor;

/// The representation of an optic: how it turns a `P`-arrow on indexed foci
/// into a `P`-arrow on the whole structure.
///
/// The input arrow receives each focus together with its index list `I`
/// (`()` for unindexed optics). A representation implements this trait for
/// every profunctor its construction supports; the kind tag on
/// [`Optic`] decides which of those the public eliminators may use.
pub trait Transform<P: Profunctor, I, S, T, A, B> {
    /// Lifts `arrow` from the foci to the structure.
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (I, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        I: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a;
}

/// An optic of kind `K` with index list `I`, focusing on `A` inside `S`.
/// Writing a `B` into the focus turns the structure into a `T`.
///
/// Every optic kind is this one type with a different `K`; the representation
/// `R` is opaque and only reached through [`Transform`]. Optics are
/// immutable: running one never changes it, and the same optic can be run
/// any number of times.
///
/// # Type Parameters
///
/// - `K`: kind tag from [`crate::kind`]
/// - `I`: index list from [`crate::index`]
/// - `S`, `T`: structure before and after an update
/// - `A`, `B`: focus before and after an update
/// - `R`: representation
///
/// # Examples
///
/// ```rust
/// use optica::kind::TraversalKind;
/// use optica::optics::lens;
///
/// let first = lens(
///     |pair: &(i32, char)| pair.0,
///     |pair: (i32, char), value: i32| (value, pair.1),
/// );
/// assert_eq!(first.view((1, 'x')), 1);
///
/// let as_traversal = first.cast::<TraversalKind>();
/// assert_eq!(as_traversal.to_vec((1, 'x')), vec![1]);
/// ```
pub struct Optic<K, I, S, T, A, B, R> {
    repr: R,
    marker: PhantomData<fn() -> (K, I, S, T, A, B)>,
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    pub(crate) const fn new(repr: R) -> Self {
        Self {
            repr,
            marker: PhantomData,
        }
    }

    /// The value-level kind of this optic.
    #[inline]
    pub const fn kind(&self) -> KindTag {
        K::TAG
    }

    /// Borrows the representation.
    #[inline]
    pub const fn repr(&self) -> &R {
        &self.repr
    }

    /// Takes the representation out.
    #[inline]
    pub fn into_repr(self) -> R {
        self.repr
    }

    /// Uses this optic as an optic of the weaker kind `K2`.
    ///
    /// Only the kind tag changes; every eliminator valid at `K2` behaves
    /// exactly as it would on `self`.
    ///
    /// ```compile_fail
    /// use optica::kind::LensKind;
    /// use optica::optics::to;
    ///
    /// // A getter cannot pretend to be a lens.
    /// let length = to(|text: String| text.len());
    /// let _ = length.cast::<LensKind>();
    /// ```
    #[inline]
    pub fn cast<K2: Kind>(self) -> Optic<K2, I, S, T, A, B, R>
    where
        K: Is<K2>,
    {
        Optic::new(self.repr)
    }

    /// Runs the representation at `P`, ignoring indices.
    pub(crate) fn run<'a, P>(&'a self, arrow: P::Arrow<'a, A, B>) -> P::Arrow<'a, S, T>
    where
        P: Profunctor + 'a,
        R: Transform<P, I, S, T, A, B>,
        I: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        self.repr.transform(P::lmap(arrow, |(_, focus): (I, A)| focus))
    }

    /// Runs the representation at `P` with the full index list.
    pub(crate) fn run_indexed<'a, P>(
        &'a self,
        arrow: P::Arrow<'a, (I, A), B>,
    ) -> P::Arrow<'a, S, T>
    where
        P: Profunctor + 'a,
        R: Transform<P, I, S, T, A, B>,
        I: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        self.repr.transform(arrow)
    }
}

impl<K, I, S, T, A, B, R: Clone> Clone for Optic<K, I, S, T, A, B, R> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
            marker: PhantomData,
        }
    }
}

impl<K: Kind, I, S, T, A, B, R: fmt::Debug> fmt::Debug for Optic<K, I, S, T, A, B, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Optic")
            .field("kind", &K::TAG)
            .field("repr", &self.repr)
            .finish()
    }
}
