//! Lenses: exactly one focus that can be read and replaced.
//!
//! A lens is built from a `view` function reading the focus and an `update`
//! function writing a new focus into the structure.
//!
//! # Laws
//!
//! 1. **GetPut**: writing back what was read changes nothing.
//!    ```text
//!    lens.set(source.clone(), lens.view(source.clone())) == source
//!    ```
//! 2. **PutGet**: reading after a write returns what was written.
//!    ```text
//!    lens.view(lens.set(source, value.clone())) == value
//!    ```
//! 3. **PutPut**: the second of two writes wins.
//!    ```text
//!    lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```rust
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(point.clone()), 10);
//! assert_eq!(x_lens.set(point.clone(), 100), Point { x: 100, y: 20 });
//! assert_eq!(x_lens.over(point, |x| x * 2).x, 20);
//! ```

use std::fmt;

use super::{Optic, Transform};
use crate::index::NoIx;
use crate::kind::LensKind;
use crate::profunctor::Strong;

/// A lens `S -> A` that turns `S` into `T` when given a `B`.
pub type Lens<S, T, A, B, R> = Optic<LensKind, NoIx, S, T, A, B, R>;

/// A lens that does not change types.
pub type SimpleLens<S, A, R> = Lens<S, S, A, A, R>;

/// Representation of [`lens`].
#[derive(Clone, Copy)]
pub struct LensRepr<V, U> {
    view: V,
    update: U,
}

/// The representation the derive macros use: plain function pointers.
pub type FnLens<S, A> = LensRepr<fn(&S) -> A, fn(S, A) -> S>;

impl<P, S, T, A, B, V, U> Transform<P, NoIx, S, T, A, B> for LensRepr<V, U>
where
    P: Strong,
    V: Fn(&S) -> A,
    U: Fn(S, B) -> T,
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
            P::first::<(NoIx, A), B, S>(arrow),
            move |source: S| (((), (self.view)(&source)), source),
            move |(value, source): (B, S)| (self.update)(source, value),
        )
    }
}

impl<V, U> fmt::Debug for LensRepr<V, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LensRepr").finish_non_exhaustive()
    }
}

/// Builds a lens from a reading and a writing function.
///
/// # Examples
///
/// ```rust
/// use optica::optics::lens;
///
/// let first = lens(
///     |pair: &(i32, i32)| pair.0,
///     |pair: (i32, i32), value: i32| (value, pair.1),
/// );
/// assert_eq!(first.view((1, 2)), 1);
/// assert_eq!(first.set((1, 2), 9), (9, 2));
/// assert_eq!(first.set(first.set((1, 2), 9), 5), (5, 2));
/// ```
#[must_use]
pub const fn lens<S, T, A, B, V, U>(view: V, update: U) -> Lens<S, T, A, B, LensRepr<V, U>>
where
    V: Fn(&S) -> A,
    U: Fn(S, B) -> T,
{
    Optic::new(LensRepr { view, update })
}

/// Creates a lens for a struct field.
///
/// The field type must be `Clone`: the lens reads by cloning the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String, city: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, address: Address }
///
/// let street = lens!(Person, address) % lens!(Address, street);
///
/// let person = Person {
///     name: "Alice".to_string(),
///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
/// };
///
/// assert_eq!(street.view(person.clone()), "Main St");
/// let moved = street.set(person, "Oak Ave".to_string());
/// assert_eq!(moved.address.street, "Oak Ave");
/// assert_eq!(moved.address.city, "Tokyo");
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
