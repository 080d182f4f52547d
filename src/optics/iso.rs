//! Isomorphisms: lossless two-way conversions.
//!
//! An iso is the strongest optic with a real representation. It converts
//! `S` to `A` and `B` back to `T` with nothing left over, so it can stand in
//! for every other kind except [`equality`](super::equality).
//!
//! # Laws
//!
//! ```text
//! backward(forward(source)) == source
//! forward(backward(value)) == value
//! ```
//!
//! [`iso`] does not check these; an iso built from a pair that is not
//! inverse still runs, computing whatever the functions compute.
//!
//! # Combinators
//!
//! - [`mapping`] lifts an iso through a [`Functor`].
//! - [`coerced`] converts between types related by `From` in both
//!   directions.
//! - [`curried`], [`uncurried`] and [`flipped`] reorder the arguments of a
//!   shared [`Function`].
//! - [`involuted`] builds an iso from a function that is its own inverse.
//! - [`swapped`] exchanges the two sides of a [`Swapped`] type.
//!
//! # Examples
//!
//! ```rust
//! use optica::iso;
//!
//! let chars = iso!(
//!     |text: String| text.chars().collect::<Vec<_>>(),
//!     |letters: Vec<char>| letters.into_iter().collect::<String>()
//! );
//!
//! assert_eq!(chars.view("hi".to_string()), vec!['h', 'i']);
//! assert_eq!(chars.review(vec!['o', 'k']), "ok");
//! assert_eq!(chars.over("abc".to_string(), |mut letters| {
//!     letters.reverse();
//!     letters
//! }), "cba");
//! ```

use std::fmt;
use std::rc::Rc;

use super::reversed::ReversedRepr;
use super::{Optic, Transform};
use crate::control::Either;
use crate::index::NoIx;
use crate::kind::{Is, IsoKind, Kind};
use crate::profunctor::{Exchange, Profunctor};
use crate::typeclass::Functor;

/// An iso between `S` and `A`, turning a `B` into a `T`.
pub type Iso<S, T, A, B, R> = Optic<IsoKind, NoIx, S, T, A, B, R>;

/// An iso that does not change types.
pub type SimpleIso<S, A, R> = Iso<S, S, A, A, R>;

/// A shared function value, as used by [`curried`] and [`flipped`].
pub type Function<A, B> = Rc<dyn Fn(A) -> B>;

/// Representation of [`iso`].
#[derive(Clone, Copy)]
pub struct IsoRepr<F, G> {
    forward: F,
    backward: G,
}

/// An iso representation made of plain function pointers.
pub type FnIso<S, A> = IsoRepr<fn(S) -> A, fn(A) -> S>;

impl<P, S, T, A, B, F, G> Transform<P, NoIx, S, T, A, B> for IsoRepr<F, G>
where
    P: Profunctor,
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), B>) -> P::Arrow<'a, S, T>
    where
        P: 'a,
        S: 'a,
        T: 'a,
        A: 'a,
        B: 'a,
    {
        P::dimap(
            arrow,
            move |source: S| ((), (self.forward)(source)),
            move |value: B| (self.backward)(value),
        )
    }
}

impl<F, G> fmt::Debug for IsoRepr<F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IsoRepr").finish_non_exhaustive()
    }
}

/// Builds an iso from a conversion and its inverse.
#[must_use]
pub const fn iso<S, T, A, B, F, G>(forward: F, backward: G) -> Iso<S, T, A, B, IsoRepr<F, G>>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    Optic::new(IsoRepr { forward, backward })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Splits an iso back into its two conversions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::iso;
    ///
    /// let doubled = iso(|n: i32| n * 2, |n: i32| n / 2);
    /// let (forward, backward) = doubled.with_iso();
    /// assert_eq!(forward(21), 42);
    /// assert_eq!(backward(42), 21);
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn with_iso(&self) -> (Box<dyn Fn(S) -> A + '_>, Box<dyn Fn(B) -> T + '_>)
    where
        K: Is<IsoKind>,
        R: Transform<Exchange<A, B>, I, S, T, A, B>,
    {
        self.run::<Exchange<A, B>>((Box::new(|focus: A| focus), Box::new(|value: B| value)))
    }
}

/// Representation of [`mapping`].
#[derive(Clone)]
pub struct MappingRepr<O> {
    optic: O,
}

impl<O: fmt::Debug> fmt::Debug for MappingRepr<O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MappingRepr").field("optic", &self.optic).finish()
    }
}

impl<P, K, I, S, T, A, B, R, FS>
    Transform<P, NoIx, FS, FS::WithType<T>, FS::WithType<A>, FS::WithType<B>>
    for MappingRepr<Optic<K, I, S, T, A, B, R>>
where
    P: Profunctor,
    K: Is<IsoKind>,
    R: Transform<Exchange<A, B>, I, S, T, A, B>,
    FS: Functor<Inner = S>,
    FS::WithType<B>: Functor<Inner = B, WithType<T> = FS::WithType<T>>,
{
    fn transform<'a>(
        &'a self,
        arrow: P::Arrow<'a, (NoIx, FS::WithType<A>), FS::WithType<B>>,
    ) -> P::Arrow<'a, FS, FS::WithType<T>>
    where
        P: 'a,
        FS: 'a,
        FS::WithType<T>: 'a,
        FS::WithType<A>: 'a,
        FS::WithType<B>: 'a,
    {
        let (forward, backward) = self.optic.with_iso();
        P::dimap(
            arrow,
            move |source: FS| ((), source.fmap(|element| forward(element))),
            move |values: FS::WithType<B>| values.fmap(|value| backward(value)),
        )
    }
}

/// Lifts an iso on elements to an iso on a whole [`Functor`].
///
/// # Examples
///
/// ```rust
/// use optica::optics::{iso, mapping};
///
/// let negated = iso(|n: i32| -n, |n: i32| -n);
/// let every = mapping::<Vec<i32>, _, _, _, _, _, _, _>(negated);
/// assert_eq!(every.view(vec![1, -2]), vec![-1, 2]);
/// assert_eq!(every.review(vec![3]), vec![-3]);
/// ```
#[must_use]
#[allow(clippy::type_complexity)]
pub const fn mapping<FS, K, I, S, T, A, B, R>(
    iso: Optic<K, I, S, T, A, B, R>,
) -> Iso<
    FS,
    FS::WithType<T>,
    FS::WithType<A>,
    FS::WithType<B>,
    MappingRepr<Optic<K, I, S, T, A, B, R>>,
>
where
    FS: Functor<Inner = S>,
    K: Is<IsoKind>,
{
    Optic::new(MappingRepr { optic: iso })
}

/// An iso between two types that convert into each other with `From`.
///
/// For a newtype and its field this is free at runtime.
///
/// # Examples
///
/// ```rust
/// use optica::optics::coerced;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// impl From<f64> for Meters {
///     fn from(value: f64) -> Self {
///         Self(value)
///     }
/// }
///
/// impl From<Meters> for f64 {
///     fn from(meters: Meters) -> Self {
///         meters.0
///     }
/// }
///
/// let raw = coerced::<Meters, f64>();
/// assert_eq!(raw.over(Meters(2.0), |value| value * 3.0), Meters(6.0));
/// ```
#[must_use]
pub fn coerced<S, A>() -> Iso<S, S, A, A, FnIso<S, A>>
where
    S: From<A>,
    A: From<S>,
{
    iso(A::from as fn(S) -> A, S::from as fn(A) -> S)
}

fn curry<A: Clone + 'static, B: 'static, C: 'static>(
    function: Function<(A, B), C>,
) -> Function<A, Function<B, C>> {
    Rc::new(move |first: A| {
        let function = Rc::clone(&function);
        let partial: Function<B, C> = Rc::new(move |second: B| function((first.clone(), second)));
        partial
    })
}

fn uncurry<A: 'static, B: 'static, C: 'static>(
    function: Function<A, Function<B, C>>,
) -> Function<(A, B), C> {
    Rc::new(move |(first, second): (A, B)| function(first)(second))
}

fn flip<A: 'static, B: Clone + 'static, C: 'static>(
    function: Function<A, Function<B, C>>,
) -> Function<B, Function<A, C>> {
    Rc::new(move |second: B| {
        let function = Rc::clone(&function);
        let partial: Function<A, C> = Rc::new(move |first: A| function(first)(second.clone()));
        partial
    })
}

/// The iso between a function on pairs and its curried form.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use optica::optics::{curried, Function};
///
/// let add: Function<(i32, i32), i32> = Rc::new(|(x, y)| x + y);
/// let add = curried().view(add);
/// assert_eq!(add(2)(3), 5);
/// ```
#[must_use]
#[allow(clippy::type_complexity)]
pub fn curried<A, B, C>() -> SimpleIso<
    Function<(A, B), C>,
    Function<A, Function<B, C>>,
    FnIso<Function<(A, B), C>, Function<A, Function<B, C>>>,
>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    iso(curry as fn(_) -> _, uncurry as fn(_) -> _)
}

/// The reverse of [`curried`].
#[must_use]
#[allow(clippy::type_complexity)]
pub fn uncurried<A, B, C>() -> SimpleIso<
    Function<A, Function<B, C>>,
    Function<(A, B), C>,
    ReversedRepr<
        FnIso<Function<(A, B), C>, Function<A, Function<B, C>>>,
        Function<(A, B), C>,
        Function<(A, B), C>,
        Function<A, Function<B, C>>,
        Function<A, Function<B, C>>,
    >,
>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    curried().re()
}

/// The iso swapping the first two arguments of a curried function.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use optica::optics::{flipped, Function};
///
/// let minus: Function<i32, Function<i32, i32>> = Rc::new(|x| Rc::new(move |y| x - y));
/// let flipped_minus = flipped().view(minus);
/// assert_eq!(flipped_minus(1)(10), 9);
/// ```
#[must_use]
#[allow(clippy::type_complexity)]
pub fn flipped<A, B, C>() -> Iso<
    Function<A, Function<B, C>>,
    Function<A, Function<B, C>>,
    Function<B, Function<A, C>>,
    Function<B, Function<A, C>>,
    IsoRepr<
        fn(Function<A, Function<B, C>>) -> Function<B, Function<A, C>>,
        fn(Function<B, Function<A, C>>) -> Function<A, Function<B, C>>,
    >,
>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
{
    iso(flip::<A, B, C> as fn(_) -> _, flip::<B, A, C> as fn(_) -> _)
}

/// Representation of [`involuted`].
#[derive(Clone, Copy)]
pub struct InvolutedRepr<F> {
    function: F,
}

impl<F> fmt::Debug for InvolutedRepr<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("InvolutedRepr").finish_non_exhaustive()
    }
}

impl<P, A, F> Transform<P, NoIx, A, A, A, A> for InvolutedRepr<F>
where
    P: Profunctor,
    F: Fn(A) -> A,
{
    fn transform<'a>(&'a self, arrow: P::Arrow<'a, (NoIx, A), A>) -> P::Arrow<'a, A, A>
    where
        P: 'a,
        A: 'a,
    {
        P::dimap(
            arrow,
            move |source: A| ((), (self.function)(source)),
            move |value: A| (self.function)(value),
        )
    }
}

/// An iso from a function that undoes itself.
///
/// `function(function(x)) == x` is the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use optica::optics::involuted;
///
/// let reversed = involuted(|text: String| text.chars().rev().collect::<String>());
/// assert_eq!(reversed.view("abc".to_string()), "cba");
/// assert_eq!(reversed.over("abc".to_string(), |text| text + "d"), "dabc");
/// ```
#[must_use]
pub const fn involuted<A, F>(function: F) -> SimpleIso<A, A, InvolutedRepr<F>>
where
    F: Fn(A) -> A,
{
    Optic::new(InvolutedRepr { function })
}

/// Binary type constructors with a canonical exchange of their two sides.
///
/// # Laws
///
/// ```text
/// value.swap().swap() == value
/// ```
pub trait Swapped: Sized {
    /// The type with both sides exchanged.
    type Output: Swapped<Output = Self>;

    /// Exchanges the two sides.
    fn swap(self) -> Self::Output;
}

impl<A, B> Swapped for (A, B) {
    type Output = (B, A);

    #[inline]
    fn swap(self) -> (B, A) {
        (self.1, self.0)
    }
}

impl<L, R> Swapped for Either<L, R> {
    type Output = Either<R, L>;

    #[inline]
    fn swap(self) -> Either<R, L> {
        Self::swap(self)
    }
}

/// The iso exchanging the two sides of a [`Swapped`] type.
///
/// # Examples
///
/// ```rust
/// use optica::control::Either;
/// use optica::optics::swapped;
///
/// assert_eq!(swapped().view((1, 'a')), ('a', 1));
/// assert_eq!(swapped().view(Either::<i32, char>::Left(1)), Either::Right(1));
/// ```
#[must_use]
pub fn swapped<S: Swapped>() -> SimpleIso<S, S::Output, FnIso<S, S::Output>> {
    iso(S::swap as fn(S) -> S::Output, <S::Output as Swapped>::swap as fn(S::Output) -> S)
}

/// Creates an iso from a conversion and its inverse.
///
/// # Syntax
///
/// ```text
/// iso!(forward, backward)
/// ```
///
/// # Example
///
/// ```
/// use optica::iso;
///
/// let celsius = iso!(|kelvin: f64| kelvin - 273.15, |celsius: f64| celsius + 273.15);
/// assert!((celsius.view(300.0) - 26.85).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr $(,)?) => {
        $crate::optics::iso($forward, $backward)
    };
}
