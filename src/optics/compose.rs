//! Composition of optics.
//!
//! `outer.compose(inner)` (or `outer % inner`) focuses with `outer` first and
//! then with `inner` on each of `outer`'s foci.
//!
//! - The kind of the result is the [`Join`] of both kinds. Pairs without a
//!   join, such as a setter and a getter, do not compile.
//! - The index list of the result is the outer list followed by the inner
//!   one.
//!
//! # Examples
//!
//! ```rust
//! use optica::kind::{AffineTraversalKind, Kind};
//! use optica::optics::{fst, some};
//!
//! let first_some = fst::<Option<i32>, Option<i32>, String>() % some::<i32, i32>();
//! assert_eq!(first_some.kind(), AffineTraversalKind::TAG);
//! assert_eq!(first_some.preview((Some(5), "x".to_string())), Some(5));
//! assert_eq!(first_some.preview((None, "x".to_string())), None);
//! ```
//!
//! A write-only optic does not compose with a read-only one:
//!
//! ```compile_fail
//! use optica::optics::{mapped, to};
//!
//! let lengths = mapped::<String, String>() % to(|text: String| text.len());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Rem;

use super::{Optic, Transform};
use crate::index::Append;
use crate::kind::{Join, Kind};
use crate::profunctor::{Profunctor, WithIndex};

/// Representation of `outer % inner`.
///
/// The inner representation runs at [`WithIndex<P, I1>`] so it sees the
/// outer indices of the focus it is applied to.
pub struct Composed<R1, R2, I1, I2, A, B> {
    outer: R1,
    inner: R2,
    marker: PhantomData<fn() -> (I1, I2, A, B)>,
}

impl<P, I, I1, I2, S, T, A, B, X, Y, R1, R2> Transform<P, I, S, T, X, Y>
    for Composed<R1, R2, I1, I2, A, B>
where
    P: Profunctor,
    I1: Append<I2, Output = I>,
    R1: Transform<P, I1, S, T, A, B>,
    R2: Transform<WithIndex<P, I1>, I2, A, B, X, Y>,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (I, X), Y>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        I: 'a,
        S: 'a,
        T: 'a,
        X: 'a,
        Y: 'a,
    {
        let nested = P::lmap(arrow, |(outer, (inner, focus)): (I1, (I2, X))| {
            (outer.append(inner), focus)
        });
        self.outer.transform(self.inner.transform(nested))
    }
}

impl<R1: Clone, R2: Clone, I1, I2, A, B> Clone for Composed<R1, R2, I1, I2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<R1: fmt::Debug, R2: fmt::Debug, I1, I2, A, B> fmt::Debug for Composed<R1, R2, I1, I2, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The optic produced by composing `Optic<K1, I1, S, T, A, B, R1>` with
/// `Optic<K2, I2, A, B, X, Y, R2>`.
pub type ComposedOptic<K1, K2, I1, I2, S, T, A, B, X, Y, R1, R2> = Optic<
    <K1 as Join<K2>>::Output,
    <I1 as Append<I2>>::Output,
    S,
    T,
    X,
    Y,
    Composed<R1, R2, I1, I2, A, B>,
>;

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Focuses with `self`, then with `inner`.
    ///
    /// Runtime behavior is associative: `(a % b) % c` and `a % (b % c)` run
    /// the same accessors in the same order.
    pub fn compose<K2, I2, X, Y, R2>(
        self,
        inner: Optic<K2, I2, A, B, X, Y, R2>,
    ) -> ComposedOptic<K, K2, I, I2, S, T, A, B, X, Y, R, R2>
    where
        K: Join<K2>,
        K2: Kind,
        I: Append<I2>,
    {
        Optic::new(Composed {
            outer: self.into_repr(),
            inner: inner.into_repr(),
            marker: PhantomData,
        })
    }
}

impl<K, K2, I, I2, S, T, A, B, X, Y, R, R2> Rem<Optic<K2, I2, A, B, X, Y, R2>>
    for Optic<K, I, S, T, A, B, R>
where
    K: Join<K2>,
    K2: Kind,
    I: Append<I2>,
{
    type Output = ComposedOptic<K, K2, I, I2, S, T, A, B, X, Y, R, R2>;

    #[inline]
    fn rem(self, inner: Optic<K2, I2, A, B, X, Y, R2>) -> Self::Output {
        self.compose(inner)
    }
}
