//! Control structures used by the profunctor encoding.
//!
//! - [`Either`]: A value that can be one of two types (used by
//!   [`Choice`](crate::profunctor::Choice) and prisms)

mod either;

pub use either::Either;
