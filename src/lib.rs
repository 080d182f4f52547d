//! # optica
//!
//! Profunctor optics for Rust with a statically checked kind lattice.
//!
//! ## Overview
//!
//! An optic is a first-class accessor into a data structure. This library
//! represents every optic kind with one carrier type, [`optics::Optic`],
//! parameterized by:
//!
//! - **Kind**: a zero-sized tag from [`kind`] (Lens, Prism, Traversal, ...)
//!   that decides which operations are allowed
//! - **Index list**: the positions an indexed optic reports, from [`index`]
//! - **Representation**: a value implementing [`optics::Transform`] for the
//!   profunctors in [`profunctor`]
//!
//! Composition with `%` computes the resulting kind at compile time. Using an
//! operation the kind does not support, or composing kinds with no common
//! upper bound, is a type error.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Lenses, Prisms)]` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`kind::KindTag`] and
//!   [`control::Either`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//!
//! let first_some = fst::<Option<i32>, Option<i32>, &str>() % some::<i32, i32>();
//!
//! assert_eq!(first_some.preview((Some(3), "x")), Some(3));
//! assert_eq!(first_some.over((Some(3), "x"), |n| n + 1), (Some(4), "x"));
//! assert_eq!(first_some.over((None, "x"), |n| n + 1), (None, "x"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic carrier, constructors, standard optics, kinds and
/// the effects used with `traverse`.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::Either;
    pub use crate::index::{NoIx, WithIx};
    pub use crate::kind::*;
    pub use crate::optics::*;
    pub use crate::typeclass::{IdentityEffect, Monoid, OptionEffect, ResultEffect};

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

pub mod control;
pub mod index;
pub mod kind;
pub mod optics;
pub mod profunctor;
pub mod typeclass;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
