//! Index lists.
//!
//! Indexed optics carry a type-level list of index types next to their kind.
//! The list is a nested pair terminated by `()`, so the same type also holds
//! the index values at runtime:
//!
//! | List | Type | Value |
//! |---|---|---|
//! | empty | `()` | `()` |
//! | one index | `(usize, ())` | `(3, ())` |
//! | two indices | `(usize, (char, ()))` | `(3, ('x', ()))` |
//!
//! Composition concatenates lists with [`Append`], outer indices first.
//! Repeated index types are kept as they are.
//!
//! # Examples
//!
//! ```rust
//! use optica::index::Append;
//!
//! let outer = (1_usize, ());
//! let inner = ('a', (2_usize, ()));
//! assert_eq!(outer.append(inner), (1, ('a', (2, ()))));
//! ```

/// The empty index list.
pub type NoIx = ();

/// An index list holding exactly `I`.
pub type WithIx<I> = (I, ());

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<Head, Tail: Sealed> Sealed for (Head, Tail) {}
}

/// A well-formed index list.
pub trait IndexList: sealed::Sealed {
    /// Number of indices in the list.
    const LENGTH: usize;
}

impl IndexList for () {
    const LENGTH: usize = 0;
}

impl<Head, Tail: IndexList> IndexList for (Head, Tail) {
    const LENGTH: usize = 1 + Tail::LENGTH;
}

/// Concatenation of index lists.
pub trait Append<Rhs>: IndexList {
    /// `Self` followed by `Rhs`.
    type Output;

    /// Concatenates the runtime values.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<Head, Tail, Rhs> Append<Rhs> for (Head, Tail)
where
    Tail: Append<Rhs>,
{
    type Output = (Head, Tail::Output);

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        (self.0, self.1.append(rhs))
    }
}

/// An index list with exactly one element.
///
/// Indexed eliminators such as [`Optic::iover`](crate::optics::Optic::iover)
/// need one index per focus. Optics carrying more than one index must merge
/// them first with [`Optic::icompose`](crate::optics::Optic::icompose).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a single index",
    note = "merge the indices with `icompose` or drop them with `erase_indices`"
)]
pub trait SingleIndex: IndexList {
    /// The index type.
    type Index;

    /// Borrows the index value.
    fn index(&self) -> &Self::Index;

    /// Unwraps the index value.
    fn into_index(self) -> Self::Index;

    /// Wraps an index value.
    fn from_index(index: Self::Index) -> Self;
}

impl<I> SingleIndex for (I, ()) {
    type Index = I;

    #[inline]
    fn index(&self) -> &I {
        &self.0
    }

    #[inline]
    fn into_index(self) -> I {
        self.0
    }

    #[inline]
    fn from_index(index: I) -> Self {
        (index, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(<() as Append<(u8, ())>>::Output, (u8, ()));
    assert_type_eq_all!(<(u8, ()) as Append<()>>::Output, (u8, ()));
    assert_type_eq_all!(<(u8, ()) as Append<(u8, ())>>::Output, (u8, (u8, ())));
    assert_impl_all!((usize, ()): SingleIndex);
    assert_not_impl_any!((): SingleIndex);
    assert_not_impl_any!((usize, (usize, ())): SingleIndex);

    #[test]
    fn test_append_keeps_outer_indices_first() {
        let combined = (1_u8, ('x', ())).append(("inner", ()));
        assert_eq!(combined, (1, ('x', ("inner", ()))));
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let combined = (1_usize, ()).append((1_usize, ()));
        assert_eq!(combined, (1, (1, ())));
        assert_eq!(<(usize, (usize, ())) as IndexList>::LENGTH, 2);
    }

    #[test]
    fn test_single_index_round_trip() {
        let single = <(char, ())>::from_index('q');
        assert_eq!(single.index(), &'q');
        assert_eq!(single.into_index(), 'q');
    }
}
