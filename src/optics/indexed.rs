//! Indexed optics and the bridge to unindexed ones.
//!
//! An indexed optic pairs each focus with an index, such as a position or a
//! key. The index types are tracked in the optic's index list:
//!
//! - Every unindexed eliminator accepts an indexed optic and ignores the
//!   indices, so an indexed traversal is also a plain traversal.
//! - Composition appends index lists, outer first. Composing with an
//!   unindexed optic keeps the other side's list unchanged.
//! - The indexed eliminators ([`iover`](Optic::iover),
//!   [`ito_vec`](Optic::ito_vec), ...) need a single index. Merge two or
//!   three with [`icompose`](Optic::icompose) or
//!   [`icompose3`](Optic::icompose3) first.
//!
//! # Examples
//!
//! ```rust
//! use optica::optics::{itraversed, traversed};
//!
//! let grid = vec![vec!['a', 'b'], vec!['c']];
//! let cells = itraversed::<Vec<char>, Vec<char>>() % itraversed::<char, char>();
//!
//! let positions = cells.clone().icompose(|row, column| (row, column)).ito_vec(grid.clone());
//! assert_eq!(positions, vec![((0, 0), 'a'), ((0, 1), 'b'), ((1, 0), 'c')]);
//!
//! let plain = traversed::<Vec<char>, Vec<char>>() % traversed::<char, char>();
//! assert_eq!(cells.to_vec(grid.clone()), plain.to_vec(grid));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Optic, Transform};
use crate::control::Either;
use crate::index::{NoIx, SingleIndex, WithIx};
use crate::kind::{
    AffineFoldKind, AffineTraversalKind, FoldKind, GetterKind, Is, Kind, LensKind, SetterKind,
    TraversalKind,
};
use crate::profunctor::{
    Bicontravariant, Choice, Forget, FunArrow, Mapping, Profunctor, Star, Traversing,
};
use crate::typeclass::{Applicative, Monoid};

/// An indexed lens with index `J`.
pub type IxLens<J, S, T, A, B, R> = Optic<LensKind, WithIx<J>, S, T, A, B, R>;

/// An indexed affine traversal with index `J`.
pub type IxAffineTraversal<J, S, T, A, B, R> = Optic<AffineTraversalKind, WithIx<J>, S, T, A, B, R>;

/// An indexed traversal with index `J`.
pub type IxTraversal<J, S, T, A, B, R> = Optic<TraversalKind, WithIx<J>, S, T, A, B, R>;

/// An indexed getter with index `J`.
pub type IxGetter<J, S, A, R> = Optic<GetterKind, WithIx<J>, S, S, A, A, R>;

/// An indexed affine fold with index `J`.
pub type IxAffineFold<J, S, A, R> = Optic<AffineFoldKind, WithIx<J>, S, S, A, A, R>;

/// An indexed fold with index `J`.
pub type IxFold<J, S, A, R> = Optic<FoldKind, WithIx<J>, S, S, A, A, R>;

/// An indexed setter with index `J`.
pub type IxSetter<J, S, T, A, B, R> = Optic<SetterKind, WithIx<J>, S, T, A, B, R>;

/// Representation of [`itraversal`].
pub struct IxTraversalRepr<Sp, Rb, C> {
    split: Sp,
    rebuild: Rb,
    marker: PhantomData<fn() -> C>,
}

impl<Sp: Clone, Rb: Clone, C> Clone for IxTraversalRepr<Sp, Rb, C> {
    fn clone(&self) -> Self {
        Self {
            split: self.split.clone(),
            rebuild: self.rebuild.clone(),
            marker: PhantomData,
        }
    }
}

impl<Sp, Rb, C> fmt::Debug for IxTraversalRepr<Sp, Rb, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IxTraversalRepr").finish_non_exhaustive()
    }
}

impl<P, J, S, T, A, B, C, Sp, Rb> Transform<P, WithIx<J>, S, T, A, B>
    for IxTraversalRepr<Sp, Rb, C>
where
    P: Traversing,
    Sp: Fn(S) -> (Vec<(J, A)>, C),
    Rb: Fn(C, Vec<B>) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (WithIx<J>, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        WithIx<J>: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::wander(
            arrow,
            move |source: S| {
                let (foci, context) = (self.split)(source);
                let indexed = foci
                    .into_iter()
                    .map(|(index, focus)| ((index, ()), focus))
                    .collect();
                (indexed, context)
            },
            move |context: C, values: Vec<B>| (self.rebuild)(context, values),
        )
    }
}

/// Builds an indexed traversal. `split` lists each focus with its index.
///
/// # Examples
///
/// ```rust
/// use optica::optics::itraversal;
///
/// let fields = itraversal(
///     |(x, y): (i32, i32)| (vec![('x', x), ('y', y)], ()),
///     |(), values: Vec<i32>| (values[0], values[1]),
/// );
/// assert_eq!(fields.iover((1, 2), |axis, n| if axis == 'y' { -n } else { n }), (1, -2));
/// ```
#[must_use]
pub const fn itraversal<J, S, T, A, B, C, Sp, Rb>(
    split: Sp,
    rebuild: Rb,
) -> IxTraversal<J, S, T, A, B, IxTraversalRepr<Sp, Rb, C>>
where
    Sp: Fn(S) -> (Vec<(J, A)>, C),
    Rb: Fn(C, Vec<B>) -> T,
{
    Optic::new(IxTraversalRepr {
        split,
        rebuild,
        marker: PhantomData,
    })
}

/// Representation of [`ifolding`].
#[derive(Clone, Copy)]
pub struct IfoldingRepr<F> {
    function: F,
}

impl<F> fmt::Debug for IfoldingRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IfoldingRepr").finish_non_exhaustive()
    }
}

impl<P, J, S, T, A, B, F, It> Transform<P, WithIx<J>, S, T, A, B> for IfoldingRepr<F>
where
    P: Traversing + Bicontravariant,
    F: Fn(S) -> It,
    It: IntoIterator<Item = (J, A)>,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (WithIx<J>, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        WithIx<J>: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        let every = P::wander(
            P::rphantom::<(WithIx<J>, A), B, ()>(arrow),
            move |source: S| {
                let foci = (self.function)(source)
                    .into_iter()
                    .map(|(index, focus)| ((index, ()), focus))
                    .collect();
                (foci, ())
            },
            |(), _: Vec<()>| (),
        );
        P::rphantom::<S, (), T>(every)
    }
}

/// Builds an indexed fold from a function listing each focus with its index.
#[must_use]
pub const fn ifolding<J, S, A, F, It>(function: F) -> IxFold<J, S, A, IfoldingRepr<F>>
where
    F: Fn(S) -> It,
    It: IntoIterator<Item = (J, A)>,
{
    Optic::new(IfoldingRepr { function })
}

/// Representation of [`isets`].
#[derive(Clone, Copy)]
pub struct IsetsRepr<F> {
    mapper: F,
}

impl<F> fmt::Debug for IsetsRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IsetsRepr").finish_non_exhaustive()
    }
}

impl<P, J, S, T, A, B, F> Transform<P, WithIx<J>, S, T, A, B> for IsetsRepr<F>
where
    P: Mapping,
    F: Fn(&dyn Fn(J, A) -> B, S) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (WithIx<J>, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        WithIx<J>: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::roam(
            arrow,
            move |function: &dyn Fn((WithIx<J>, A)) -> B, source: S| {
                (self.mapper)(&|index: J, focus: A| function(((index, ()), focus)), source)
            },
        )
    }
}

/// Builds an indexed setter from a function that maps every focus with its
/// index.
#[must_use]
pub const fn isets<J, S, T, A, B, F>(mapper: F) -> IxSetter<J, S, T, A, B, IsetsRepr<F>>
where
    F: Fn(&dyn Fn(J, A) -> B, S) -> T,
{
    Optic::new(IsetsRepr { mapper })
}

/// Representation of [`Optic::reindexed`] and the other index rewrites,
/// mapping the index list `I` with `F`.
pub struct ReindexRepr<R, F, I> {
    inner: R,
    function: F,
    marker: PhantomData<fn() -> I>,
}

impl<R: Clone, F: Clone, I> Clone for ReindexRepr<R, F, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            function: self.function.clone(),
            marker: PhantomData,
        }
    }
}

impl<R: fmt::Debug, F, I> fmt::Debug for ReindexRepr<R, F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReindexRepr")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P, I, J, S, T, A, B, R, F> Transform<P, J, S, T, A, B> for ReindexRepr<R, F, I>
where
    P: Profunctor,
    R: Transform<P, I, S, T, A, B>,
    F: Fn(I) -> J,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (J, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        J: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        self.inner.transform(P::lmap(arrow, move |(index, focus): (I, A)| {
            ((self.function)(index), focus)
        }))
    }
}

fn erase<I>(_: I) -> NoIx {}

/// Representation of [`Optic::indices`].
pub struct IndicesRepr<R, F, I> {
    inner: R,
    predicate: F,
    marker: PhantomData<fn() -> I>,
}

impl<R: Clone, F: Clone, I> Clone for IndicesRepr<R, F, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            predicate: self.predicate.clone(),
            marker: PhantomData,
        }
    }
}

impl<R: fmt::Debug, F, I> fmt::Debug for IndicesRepr<R, F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndicesRepr")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P, I, S, T, A, R, F> Transform<P, I, S, T, A, A> for IndicesRepr<R, F, I>
where
    P: Choice,
    I: SingleIndex,
    R: Transform<P, I, S, T, A, A>,
    F: Fn(&I::Index) -> bool,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (I, A), A>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        I: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
    {
        let selected = P::dimap(
            P::right::<(I, A), A, A>(arrow),
            move |(index, focus): (I, A)| {
                if (self.predicate)(index.index()) {
                    Either::Right((index, focus))
                } else {
                    Either::Left(focus)
                }
            },
            Either::into_inner,
        );
        self.inner.transform(selected)
    }
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Drops every index, keeping kind and behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::ichars;
    ///
    /// let plain = ichars().erase_indices();
    /// assert_eq!(plain.to_vec("foo".to_string()), vec!['f', 'o', 'o']);
    /// ```
    #[must_use]
    pub fn erase_indices(self) -> Optic<K, NoIx, S, T, A, B, ReindexRepr<R, fn(I) -> NoIx, I>> {
        Optic::new(ReindexRepr {
            inner: self.into_repr(),
            function: erase::<I> as fn(I) -> NoIx,
            marker: PhantomData,
        })
    }

    /// Maps the single index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::itraversed;
    ///
    /// let one_based = itraversed::<char, char>().reindexed(|position| position + 1);
    /// assert_eq!(one_based.ito_vec(vec!['a', 'b']), vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn reindexed<J>(
        self,
        function: impl Fn(I::Index) -> J,
    ) -> Optic<K, WithIx<J>, S, T, A, B, ReindexRepr<R, impl Fn(I) -> WithIx<J>, I>>
    where
        I: SingleIndex,
    {
        Optic::new(ReindexRepr {
            inner: self.into_repr(),
            function: move |index: I| (function(index.into_index()), ()),
            marker: PhantomData,
        })
    }

    /// Applies `function` to every focus and its index.
    pub fn iover(&self, source: S, function: impl Fn(I::Index, A) -> B) -> T
    where
        K: Is<SetterKind>,
        I: SingleIndex,
        R: Transform<FunArrow, I, S, T, A, B>,
    {
        let modify = self.run_indexed::<FunArrow>(Box::new(|(index, focus): (I, A)| {
            function(index.into_index(), focus)
        }));
        modify(source)
    }

    /// Replaces every focus with a value computed from its index.
    pub fn iset(&self, source: S, function: impl Fn(I::Index) -> B) -> T
    where
        K: Is<SetterKind>,
        I: SingleIndex,
        R: Transform<FunArrow, I, S, T, A, B>,
    {
        self.iover(source, |index, _| function(index))
    }

    /// Collects every focus with its index.
    pub fn ito_vec(&self, source: S) -> Vec<(I::Index, A)>
    where
        K: Is<FoldKind>,
        I: SingleIndex,
        R: Transform<Forget<Vec<(I::Index, A)>>, I, S, T, A, B>,
    {
        let collect = self.run_indexed::<Forget<Vec<(I::Index, A)>>>(Box::new(
            |(index, focus): (I, A)| vec![(index.into_index(), focus)],
        ));
        collect(source)
    }

    /// Maps every focus and its index into a monoid and combines the results.
    pub fn ifold_map<M: Monoid>(&self, source: S, function: impl Fn(I::Index, A) -> M) -> M
    where
        K: Is<FoldKind>,
        I: SingleIndex,
        R: Transform<Forget<M>, I, S, T, A, B>,
    {
        let summarize = self.run_indexed::<Forget<M>>(Box::new(|(index, focus): (I, A)| {
            function(index.into_index(), focus)
        }));
        summarize(source)
    }

    /// Runs an effectful function on every focus and its index.
    pub fn itraverse<F: Applicative>(
        &self,
        source: S,
        function: impl Fn(I::Index, A) -> F::Apply<B>,
    ) -> F::Apply<T>
    where
        K: Is<TraversalKind>,
        I: SingleIndex,
        R: Transform<Star<F>, I, S, T, A, B>,
    {
        let effectful = self.run_indexed::<Star<F>>(Box::new(|(index, focus): (I, A)| {
            function(index.into_index(), focus)
        }));
        effectful(source)
    }
}

impl<K: Kind, I, S, T, A, R> Optic<K, I, S, T, A, A, R> {
    /// Keeps only the foci whose index satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::itraversed;
    ///
    /// let odd_positions = itraversed::<i32, i32>().indices(|position| position % 2 == 1);
    /// assert_eq!(odd_positions.over(vec![1, 2, 3, 4], |n| -n), vec![1, -2, 3, -4]);
    /// ```
    pub fn indices(
        self,
        predicate: impl Fn(&I::Index) -> bool,
    ) -> Optic<TraversalKind, I, S, T, A, A, IndicesRepr<R, impl Fn(&I::Index) -> bool, I>>
    where
        K: Is<TraversalKind>,
        I: SingleIndex,
    {
        Optic::new(IndicesRepr {
            inner: self.into_repr(),
            predicate,
            marker: PhantomData,
        })
    }
}

impl<K: Kind, I1, I2, S, T, A, B, R> Optic<K, (I1, (I2, ())), S, T, A, B, R> {
    /// Merges two indices into one.
    #[allow(clippy::type_complexity)]
    pub fn icompose<J>(
        self,
        function: impl Fn(I1, I2) -> J,
    ) -> Optic<
        K,
        WithIx<J>,
        S,
        T,
        A,
        B,
        ReindexRepr<R, impl Fn((I1, (I2, ()))) -> WithIx<J>, (I1, (I2, ()))>,
    > {
        Optic::new(ReindexRepr {
            inner: self.into_repr(),
            function: move |(first, (second, ())): (I1, (I2, ()))| (function(first, second), ()),
            marker: PhantomData,
        })
    }
}

impl<K: Kind, I1, I2, I3, S, T, A, B, R> Optic<K, (I1, (I2, (I3, ()))), S, T, A, B, R> {
    /// Merges three indices into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::itraversed;
    ///
    /// let cube = vec![vec![vec![1, 2]], vec![vec![3]]];
    /// let cells = itraversed::<Vec<Vec<i32>>, Vec<Vec<i32>>>()
    ///     % itraversed::<Vec<i32>, Vec<i32>>()
    ///     % itraversed::<i32, i32>();
    /// let labelled = cells.icompose3(|x, y, z| format!("{x}{y}{z}"));
    /// assert_eq!(
    ///     labelled.ito_vec(cube),
    ///     vec![("000".to_string(), 1), ("001".to_string(), 2), ("100".to_string(), 3)]
    /// );
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn icompose3<J>(
        self,
        function: impl Fn(I1, I2, I3) -> J,
    ) -> Optic<
        K,
        WithIx<J>,
        S,
        T,
        A,
        B,
        ReindexRepr<R, impl Fn((I1, (I2, (I3, ())))) -> WithIx<J>, (I1, (I2, (I3, ())))>,
    > {
        Optic::new(ReindexRepr {
            inner: self.into_repr(),
            function: move |(first, (second, (third, ()))): (I1, (I2, (I3, ())))| {
                (function(first, second, third), ())
            },
            marker: PhantomData,
        })
    }
}
