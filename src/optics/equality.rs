//! The identity optic.

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::EqualityKind;
use crate::profunctor::Profunctor;

/// An equality witnessing that `S` is `A` and `T` is `B`.
pub type Equality<S, T, R> = Optic<EqualityKind, NoIx, S, T, S, T, R>;

/// Representation of [`equality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityRepr;

impl<P: Profunctor, A, B> Transform<P, NoIx, A, B, A, B> for EqualityRepr {
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, A, B>
    where
        P: 'a,
        A: 'a,
        B: 'a,
    {
        P::lmap(arrow, |focus: A| ((), focus))
    }
}

/// The optic focusing on the whole structure.
///
/// It is the strongest kind and the unit of composition: composing with it
/// on either side changes neither behavior nor kind.
///
/// # Examples
///
/// ```rust
/// use optica::kind::{Kind, LensKind};
/// use optica::optics::{equality, fst};
///
/// let same = equality::<(i32, char), (i32, char)>() % fst::<i32, i32, char>();
/// assert_eq!(same.kind(), LensKind::TAG);
/// assert_eq!(same.set((1, 'a'), 2), (2, 'a'));
/// ```
#[must_use]
pub const fn equality<A, B>() -> Equality<A, B, EqualityRepr> {
    Optic::new(EqualityRepr)
}
