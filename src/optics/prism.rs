//! Prisms: at most one focus, which also determines the whole structure.
//!
//! A prism matches one case of a sum type. Reading may fail, but a focus can
//! always be turned back into the structure, so every prism is also a
//! review.
//!
//! # Laws
//!
//! 1. **`PreviewReview`**: building and then matching finds what was built.
//!    ```text
//!    prism.preview(prism.review(value.clone())) == Some(value)
//!    ```
//! 2. **`ReviewPreview`**: a successful match can be rebuilt.
//!    ```text
//!    prism.preview(source.clone()).map(|value| prism.review(value)) is Some(source) or None
//!    ```
//!
//! # Examples
//!
//! ```rust
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.preview(Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle.review(10.0), Shape::Circle(10.0));
//! ```

use std::fmt;

use super::{Optic, Transform};
use crate::control::Either;
use crate::index::NoIx;
use crate::kind::{Is, Kind, PrismKind};
use crate::profunctor::{Choice, Market};

/// A prism matching `A` in `S` and building `T` from a `B`.
pub type Prism<S, T, A, B, R> = Optic<PrismKind, NoIx, S, T, A, B, R>;

/// A prism that does not change types.
pub type SimplePrism<S, A, R> = Prism<S, S, A, A, R>;

/// Representation of [`prism`].
#[derive(Clone, Copy)]
pub struct PrismRepr<Bd, M> {
    build: Bd,
    matching: M,
}

/// The representation the derive macros use: plain function pointers.
pub type FnPrism<S, A> = PrismRepr<fn(A) -> S, fn(S) -> Result<A, S>>;

impl<P, S, T, A, B, Bd, M> Transform<P, NoIx, S, T, A, B> for PrismRepr<Bd, M>
where
    P: Choice,
    Bd: Fn(B) -> T,
    M: Fn(S) -> Result<A, T>,
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
            P::right::<(NoIx, A), B, T>(arrow),
            move |source: S| match (self.matching)(source) {
                Ok(focus) => Either::Right(((), focus)),
                Err(rest) => Either::Left(rest),
            },
            move |result: Either<T, B>| match result {
                Either::Left(rest) => rest,
                Either::Right(value) => (self.build)(value),
            },
        )
    }
}

impl<Bd, M> fmt::Debug for PrismRepr<Bd, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PrismRepr").finish_non_exhaustive()
    }
}

/// Builds a prism from a constructor and a matcher.
///
/// `matching` returns `Ok` with the focus, or `Err` with the structure
/// already converted to the output type when the case does not match.
///
/// # Examples
///
/// ```rust
/// use optica::optics::prism;
///
/// let ok = prism(
///     |value: String| Ok::<String, i32>(value),
///     |source: Result<i32, i32>| match source {
///         Ok(value) => Ok(value),
///         Err(error) => Err(Err(error)),
///     },
/// );
/// assert_eq!(ok.over(Ok(4), |n| n.to_string()), Ok("4".to_string()));
/// assert_eq!(ok.over(Err(7), |n| n.to_string()), Err(7));
/// ```
#[must_use]
pub const fn prism<S, T, A, B, Bd, M>(build: Bd, matching: M) -> Prism<S, T, A, B, PrismRepr<Bd, M>>
where
    Bd: Fn(B) -> T,
    M: Fn(S) -> Result<A, T>,
{
    Optic::new(PrismRepr { build, matching })
}

/// Builds a type-preserving prism from a constructor and a partial reader.
///
/// # Examples
///
/// ```rust
/// use optica::optics::simple_prism;
///
/// let positive = simple_prism(
///     |value: u32| i64::from(value),
///     |source: &i64| u32::try_from(*source).ok(),
/// );
/// assert_eq!(positive.preview(42), Some(42));
/// assert_eq!(positive.preview(-1), None);
/// assert_eq!(positive.review(3), 3);
/// ```
pub fn simple_prism<S, A>(
    build: impl Fn(A) -> S,
    preview: impl Fn(&S) -> Option<A>,
) -> SimplePrism<S, A, PrismRepr<impl Fn(A) -> S, impl Fn(S) -> Result<A, S>>> {
    prism(build, move |source: S| match preview(&source) {
        Some(focus) => Ok(focus),
        None => Err(source),
    })
}

impl<K: Kind, I, S, T, A, B, R> Optic<K, I, S, T, A, B, R> {
    /// Splits a prism back into its constructor and matcher.
    ///
    /// The matcher reports a miss as `Either::Left` holding the converted
    /// structure and a hit as `Either::Right` holding the focus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::control::Either;
    /// use optica::optics::some;
    ///
    /// let some_prism = some::<i32, i32>();
    /// let (build, matching) = some_prism.with_prism();
    /// assert_eq!(build(1), Some(1));
    /// assert_eq!(matching(Some(2)), Either::Right(2));
    /// assert_eq!(matching(None), Either::Left(None));
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn with_prism(
        &self,
    ) -> (
        Box<dyn Fn(B) -> T + '_>,
        Box<dyn Fn(S) -> Either<T, A> + '_>,
    )
    where
        K: Is<PrismKind>,
        R: Transform<Market<A, B>, I, S, T, A, B>,
    {
        self.run::<Market<A, B>>((
            Box::new(|value: B| value),
            Box::new(|focus: A| Either::Right(focus)),
        ))
    }

    /// Matches the focus, returning the converted structure on a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::optics::ok;
    ///
    /// let ok_prism = ok::<i32, char, String>();
    /// assert_eq!(ok_prism.matching(Ok(3)), Ok(3));
    /// assert_eq!(ok_prism.matching(Err("no".to_string())), Err(Err("no".to_string())));
    /// ```
    pub fn matching(&self, source: S) -> Result<A, T>
    where
        K: Is<PrismKind>,
        R: Transform<Market<A, B>, I, S, T, A, B>,
    {
        let (_, matching) = self.with_prism();
        matching(source).into()
    }
}

/// Creates a prism for an enum variant holding a single value.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Message {
///     Text(String),
///     Number(i32),
/// }
///
/// let number = prism!(Message, Number);
///
/// assert_eq!(number.preview(Message::Number(42)), Some(42));
/// assert_eq!(number.preview(Message::Text("hi".into())), None);
/// assert_eq!(number.over(Message::Number(1), |n| n + 1), Message::Number(2));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::prism(
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::prism(
            |value| $enum_type::<$($generic),+>::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::prism(
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Token {
        Word(String),
        Digit(u8),
        End,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Slot<T> {
        Filled(T),
        Empty,
    }

    #[rstest]
    #[case(Token::Digit(3), Some(3))]
    #[case(Token::Word("x".to_string()), None)]
    #[case(Token::End, None)]
    fn test_prism_macro_preview(#[case] source: Token, #[case] expected: Option<u8>) {
        let digit = prism!(Token, Digit);
        assert_eq!(digit.preview(source), expected);
    }

    #[test]
    fn test_prism_macro_generic_enum() {
        let filled = prism!(Slot<i32>, Filled);
        assert_eq!(filled.review(5), Slot::Filled(5));
        assert_eq!(filled.set(Slot::Empty, 9), Slot::Empty);
    }

    #[test]
    fn test_over_leaves_other_cases_alone() {
        let word = prism!(Token, Word);
        assert_eq!(word.over(Token::End, |text| text + "!"), Token::End);
        assert_eq!(
            word.over(Token::Word("hey".to_string()), |text| text + "!"),
            Token::Word("hey!".to_string())
        );
    }

    #[test]
    fn test_with_prism_recovers_both_functions() {
        let digit = prism!(Token, Digit);
        let (build, matching) = digit.with_prism();
        assert_eq!(build(1), Token::Digit(1));
        assert_eq!(matching(Token::End), Either::Left(Token::End));
    }

    #[test]
    fn test_matching_reports_miss_with_source() {
        let digit = prism!(Token, Digit);
        assert_eq!(digit.matching(Token::End), Err(Token::End));
        assert_eq!(digit.matching(Token::Digit(8)), Ok(8));
    }
}
