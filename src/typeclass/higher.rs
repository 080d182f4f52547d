//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] recovers the constructor from a saturated
//! type: `Option<i32>` knows it is `Option` applied to `i32` and can name
//! `Option<String>` as `WithType<String>`. This is what lets
//! [`mapping`](crate::optics::mapping) lift an iso through any container.
//!
//! # Example
//!
//! ```rust
//! use optica::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = rewrap(Some(1));
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to [`Inner`](TypeConstructor::Inner).
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The argument the constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
