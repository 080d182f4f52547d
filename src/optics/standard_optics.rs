//! Ready-made optics for standard library types.
//!
//! All of them are built from the public constructors and use function
//! pointers as their representation, so they are `Copy` and cost nothing to
//! create.
//!
//! | Optic | Kind | Focus |
//! |---|---|---|
//! | [`fst`], [`snd`] | lens | one component of a pair |
//! | [`some`] | prism | the value in `Some` |
//! | [`left`], [`right`] | prism | one side of an [`Either`] |
//! | [`ok`], [`err`] | prism | one side of a `Result` |
//! | [`traversed`] | traversal | every element of a `Vec` |
//! | [`itraversed`] | indexed traversal | every element with its position |
//! | [`folded`], [`ifolded`] | (indexed) fold | every element of a `Vec` |
//! | [`mapped`] | setter | every element of a `Vec` |
//! | [`chars`], [`ichars`] | (indexed) fold | every `char` of a `String` |

use super::affine_fold::{AffineFold, AfoldingRepr, afolding};
use super::fold::{Fold, FoldingRepr, folding};
use super::indexed::{IfoldingRepr, IxFold, IxTraversal, IxTraversalRepr, ifolding, itraversal};
use super::lens::{Lens, LensRepr, lens};
use super::prism::{Prism, PrismRepr, prism};
use super::setter::{SetsRepr, Setter, sets};
use super::traversal::{Traversal, TraversalRepr, traversal};
use crate::control::Either;

/// Lens on the first component of a pair.
#[must_use]
pub fn fst<A: Clone, B, C>()
-> Lens<(A, C), (B, C), A, B, LensRepr<fn(&(A, C)) -> A, fn((A, C), B) -> (B, C)>> {
    lens(
        (|pair: &(A, C)| pair.0.clone()) as fn(&(A, C)) -> A,
        (|(_, other), value| (value, other)) as fn((A, C), B) -> (B, C),
    )
}

/// Lens on the second component of a pair.
#[must_use]
pub fn snd<A: Clone, B, C>()
-> Lens<(C, A), (C, B), A, B, LensRepr<fn(&(C, A)) -> A, fn((C, A), B) -> (C, B)>> {
    lens(
        (|pair: &(C, A)| pair.1.clone()) as fn(&(C, A)) -> A,
        (|(other, _), value| (other, value)) as fn((C, A), B) -> (C, B),
    )
}

/// Prism on the value in `Some`.
#[must_use]
pub fn some<A, B>()
-> Prism<Option<A>, Option<B>, A, B, PrismRepr<fn(B) -> Option<B>, fn(Option<A>) -> Result<A, Option<B>>>>
{
    prism(
        Some as fn(B) -> Option<B>,
        (|option: Option<A>| option.ok_or(None)) as fn(Option<A>) -> Result<A, Option<B>>,
    )
}

/// Prism on the left side of an [`Either`].
#[must_use]
pub fn left<A, B, C>() -> Prism<
    Either<A, C>,
    Either<B, C>,
    A,
    B,
    PrismRepr<fn(B) -> Either<B, C>, fn(Either<A, C>) -> Result<A, Either<B, C>>>,
> {
    prism(
        Either::Left as fn(B) -> Either<B, C>,
        (|either| match either {
            Either::Left(value) => Ok(value),
            Either::Right(other) => Err(Either::Right(other)),
        }) as fn(Either<A, C>) -> Result<A, Either<B, C>>,
    )
}

/// Prism on the right side of an [`Either`].
#[must_use]
pub fn right<A, B, C>() -> Prism<
    Either<C, A>,
    Either<C, B>,
    A,
    B,
    PrismRepr<fn(B) -> Either<C, B>, fn(Either<C, A>) -> Result<A, Either<C, B>>>,
> {
    prism(
        Either::Right as fn(B) -> Either<C, B>,
        (|either| match either {
            Either::Right(value) => Ok(value),
            Either::Left(other) => Err(Either::Left(other)),
        }) as fn(Either<C, A>) -> Result<A, Either<C, B>>,
    )
}

/// Prism on the `Ok` side of a `Result`.
#[must_use]
pub fn ok<A, B, E>() -> Prism<
    Result<A, E>,
    Result<B, E>,
    A,
    B,
    PrismRepr<fn(B) -> Result<B, E>, fn(Result<A, E>) -> Result<A, Result<B, E>>>,
> {
    prism(
        Ok as fn(B) -> Result<B, E>,
        (|result: Result<A, E>| result.map_err(Err)) as fn(Result<A, E>) -> Result<A, Result<B, E>>,
    )
}

/// Prism on the `Err` side of a `Result`.
#[must_use]
pub fn err<A, B, T>() -> Prism<
    Result<T, A>,
    Result<T, B>,
    A,
    B,
    PrismRepr<fn(B) -> Result<T, B>, fn(Result<T, A>) -> Result<A, Result<T, B>>>,
> {
    prism(
        Err as fn(B) -> Result<T, B>,
        (|result| match result {
            Ok(value) => Err(Ok(value)),
            Err(error) => Ok(error),
        }) as fn(Result<T, A>) -> Result<A, Result<T, B>>,
    )
}

/// Affine fold on the first element of a `Vec`.
#[must_use]
pub fn head<A>() -> AffineFold<Vec<A>, A, AfoldingRepr<fn(Vec<A>) -> Option<A>>> {
    afolding((|values: Vec<A>| values.into_iter().next()) as fn(Vec<A>) -> Option<A>)
}

/// Traversal over every element of a `Vec`, front to back.
#[must_use]
pub fn traversed<A, B>() -> Traversal<
    Vec<A>,
    Vec<B>,
    A,
    B,
    TraversalRepr<fn(Vec<A>) -> (Vec<A>, ()), fn((), Vec<B>) -> Vec<B>, ()>,
> {
    traversal(
        (|values| (values, ())) as fn(Vec<A>) -> (Vec<A>, ()),
        (|(), values| values) as fn((), Vec<B>) -> Vec<B>,
    )
}

/// Indexed traversal over every element of a `Vec` with its position.
#[must_use]
pub fn itraversed<A, B>() -> IxTraversal<
    usize,
    Vec<A>,
    Vec<B>,
    A,
    B,
    IxTraversalRepr<fn(Vec<A>) -> (Vec<(usize, A)>, ()), fn((), Vec<B>) -> Vec<B>, ()>,
> {
    itraversal(
        (|values: Vec<A>| (values.into_iter().enumerate().collect(), ()))
            as fn(Vec<A>) -> (Vec<(usize, A)>, ()),
        (|(), values| values) as fn((), Vec<B>) -> Vec<B>,
    )
}

/// Fold over every element of a `Vec`, front to back.
#[must_use]
pub fn folded<A>() -> Fold<Vec<A>, A, FoldingRepr<fn(Vec<A>) -> Vec<A>>> {
    folding((|values| values) as fn(Vec<A>) -> Vec<A>)
}

/// Indexed fold over every element of a `Vec` with its position.
#[must_use]
pub fn ifolded<A>() -> IxFold<usize, Vec<A>, A, IfoldingRepr<fn(Vec<A>) -> Vec<(usize, A)>>> {
    ifolding(
        (|values: Vec<A>| values.into_iter().enumerate().collect()) as fn(Vec<A>) -> Vec<(usize, A)>,
    )
}

/// Setter on every element of a `Vec`.
#[must_use]
pub fn mapped<A, B>() -> Setter<Vec<A>, Vec<B>, A, B, SetsRepr<fn(&dyn Fn(A) -> B, Vec<A>) -> Vec<B>>> {
    sets(
        (|function: &dyn Fn(A) -> B, values: Vec<A>| values.into_iter().map(function).collect())
            as fn(&dyn Fn(A) -> B, Vec<A>) -> Vec<B>,
    )
}

/// Fold over the characters of a `String`.
#[must_use]
pub fn chars() -> Fold<String, char, FoldingRepr<fn(String) -> Vec<char>>> {
    folding((|text: String| text.chars().collect()) as fn(String) -> Vec<char>)
}

/// Indexed fold over the characters of a `String` with their positions,
/// counted in characters.
#[must_use]
pub fn ichars() -> IxFold<usize, String, char, IfoldingRepr<fn(String) -> Vec<(usize, char)>>> {
    ifolding(
        (|text: String| text.chars().enumerate().collect()) as fn(String) -> Vec<(usize, char)>,
    )
}
