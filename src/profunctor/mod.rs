//! The profunctor encoding behind every optic.
//!
//! An optic of any kind is a function that turns a `P`-arrow on the focus
//! into a `P`-arrow on the whole structure, for every profunctor `P` offering
//! the capabilities the kind needs. Which capabilities an optic uses decides
//! which eliminators can run it:
//!
//! | Capability | Used by | Eliminators that supply it |
//! |---|---|---|
//! | [`Profunctor`] | iso | all |
//! | [`Strong`] | lens | view, over, traverse |
//! | [`Choice`] | prism | preview, over, review |
//! | [`Traversing`] | traversal | `to_vec`, over, traverse |
//! | [`Mapping`] | setter | over |
//! | [`Bicontravariant`] | getter, fold | view, preview, `to_vec` |
//! | [`Bifunctor`] | review | review |
//! | [`Costrong`], [`Cochoice`] | reversed lens/prism | review, view |
//!
//! Arrows are represented by the generic associated type
//! [`Profunctor::Arrow`]. A profunctor type is only a marker; the arrows are
//! values, usually boxed closures borrowing the optic that produced them.

mod exchange;
mod forget;
mod function;
mod indexed;
mod reversed;
mod star;
mod tagged;

pub use exchange::{Exchange, Market};
pub use forget::Forget;
pub use function::FunArrow;
pub use indexed::WithIndex;
pub use reversed::Reversed;
pub use star::Star;
pub use tagged::Tagged;

use crate::control::Either;

/// A type of arrows that can be pre-composed and post-composed with plain
/// functions.
///
/// # Laws
///
/// ```text
/// dimap(p, id, id) == p
/// dimap(dimap(p, f, g), h, k) == dimap(p, f . h, k . g)
/// ```
pub trait Profunctor: Sized {
    /// An arrow from `A` to `B`.
    type Arrow<'a, A: 'a, B: 'a>: 'a
    where
        Self: 'a;

    /// Maps the input with `before` and the output with `after`.
    fn dimap<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a;

    /// Maps the input only.
    fn lmap<'a, S: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        before: impl Fn(S) -> A + 'a,
    ) -> Self::Arrow<'a, S, B>
    where
        Self: 'a,
    {
        Self::dimap(arrow, before, |output: B| output)
    }

    /// Maps the output only.
    fn rmap<'a, A: 'a, B: 'a, T: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        after: impl Fn(B) -> T + 'a,
    ) -> Self::Arrow<'a, A, T>
    where
        Self: 'a,
    {
        Self::dimap(arrow, |input: A| input, after)
    }
}

/// Arrows that can carry extra data alongside their input. Lenses need this.
pub trait Strong: Profunctor {
    /// Passes the second component through untouched.
    fn first<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (A, C), (B, C)>
    where
        Self: 'a;

    /// Passes the first component through untouched.
    fn second<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, (C, A), (C, B)>
    where
        Self: 'a,
    {
        Self::dimap(
            Self::first::<A, B, C>(arrow),
            |(context, input): (C, A)| (input, context),
            |(output, context): (B, C)| (context, output),
        )
    }
}

/// The dual of [`Strong`]: an arrow over pairs that threads its extra
/// component unchanged can be cut down to the first component.
pub trait Costrong: Profunctor {
    /// Drops the threaded component.
    fn unfirst<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, (A, C), (B, C)>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a;
}

/// Arrows that can act on one branch of an [`Either`]. Prisms need this.
pub trait Choice: Profunctor {
    /// Runs on `Left`, passes `Right` through.
    fn left<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<A, C>, Either<B, C>>
    where
        Self: 'a;

    /// Runs on `Right`, passes `Left` through.
    fn right<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
    ) -> Self::Arrow<'a, Either<C, A>, Either<C, B>>
    where
        Self: 'a,
    {
        Self::dimap(
            Self::left::<A, B, C>(arrow),
            |input: Either<C, A>| input.swap(),
            |output: Either<B, C>| output.swap(),
        )
    }
}

/// The dual of [`Choice`].
pub trait Cochoice: Profunctor {
    /// Restricts an arrow over `Either` to its `Left` branch.
    fn unleft<'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, Either<A, C>, Either<B, C>>,
    ) -> Self::Arrow<'a, A, B>
    where
        Self: 'a;
}

/// Arrows that can run over every focus of a structure. Traversals need this.
///
/// The structure is described by `split`, which takes it apart into its foci
/// (in order) and a context, and `rebuild`, which puts it back together from
/// the context and as many new foci as `split` produced.
pub trait Traversing: Strong + Choice {
    /// Lifts an arrow on one focus to an arrow on the whole structure.
    fn wander<'a, S: 'a, T: 'a, A: 'a, B: 'a, C: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        split: impl Fn(S) -> (Vec<A>, C) + 'a,
        rebuild: impl Fn(C, Vec<B>) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a;
}

/// Arrows that are plain functions underneath. Setters need this.
pub trait Mapping: Traversing {
    /// Lifts an arrow through a mapping function such as `Vec::into_iter().map`.
    fn roam<'a, S: 'a, T: 'a, A: 'a, B: 'a>(
        arrow: Self::Arrow<'a, A, B>,
        mapper: impl Fn(&dyn Fn(A) -> B, S) -> T + 'a,
    ) -> Self::Arrow<'a, S, T>
    where
        Self: 'a;
}

/// Arrows whose output type is phantom. Getters and folds need this.
pub trait Bicontravariant: Profunctor {
    /// Changes the output type without touching the arrow.
    fn rphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, A, C>
    where
        Self: 'a;
}

/// Arrows whose input type is phantom. Reviews need this.
pub trait Bifunctor: Profunctor {
    /// Changes the input type without touching the arrow.
    fn lphantom<'a, A: 'a, B: 'a, C: 'a>(arrow: Self::Arrow<'a, A, B>) -> Self::Arrow<'a, C, B>
    where
        Self: 'a;
}
