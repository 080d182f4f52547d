//! Type classes the optics are run with.
//!
//! - [`TypeConstructor`] and [`Functor`]: higher-kinded mapping, used by
//!   [`mapping`](crate::optics::mapping) to lift an iso into a container.
//! - [`Semigroup`] and [`Monoid`]: how folds combine what they read. The
//!   wrappers [`Sum`], [`First`], [`Last`], [`Any`] and [`All`] pick a
//!   monoid for a plain value.
//! - [`Applicative`]: the effects an effectful traversal can sequence,
//!   [`IdentityEffect`], [`OptionEffect`] and [`ResultEffect`].
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{First, Monoid, Semigroup};
//!
//! let picked = First::combine_all([First(None), First(Some('b')), First(Some('c'))]);
//! assert_eq!(picked, First(Some('b')));
//! assert_eq!(vec![1].combine(vec![2]), vec![1, 2]);
//! ```

mod applicative;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, IdentityEffect, OptionEffect, ResultEffect};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, First, Last, Sum};
