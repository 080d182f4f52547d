//! Covariant mapping over a container.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! The mapping function may be called once per element, so it is `FnMut`
//! rather than `FnOnce`. Elements are visited in their natural order.

use super::TypeConstructor;

/// A container whose elements can be mapped without changing its shape.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Functor;
///
/// assert_eq!(vec![1, 2, 3].fmap(|n| n * 2), vec![2, 4, 6]);
/// assert_eq!(Some("abc").fmap(str::len), Some(3));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn test_option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[test]
    fn test_result_fmap_keeps_error() {
        let failed: Result<i32, &str> = Err("no");
        assert_eq!(failed.fmap(|n| n + 1), Err("no"));
    }

    #[test]
    fn test_vec_fmap_preserves_order() {
        let mut seen = Vec::new();
        let mapped = vec!['a', 'b', 'c'].fmap(|c| {
            seen.push(c);
            c.to_ascii_uppercase()
        });
        assert_eq!(mapped, vec!['A', 'B', 'C']);
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_box_fmap() {
        assert_eq!(Box::new(20).fmap(|n: i32| n.to_string()), Box::new("20".to_string()));
    }
}
