//! Derive macros for optica optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for each struct field
//! - [`Prisms`]: Generates a prism constructor for each enum variant
//!
//! The generated constructors only call `optica::optics::lens` and
//! `optica::optics::prism`, and return optics whose representation is a
//! pair of function pointers, so their types can be written down.
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> SimpleLens<Point, i32, FnLens<Point, i32>>
//! // - Point::y_lens() -> SimpleLens<Point, i32, FnLens<Point, i32>>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().view(point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> SimplePrism<Shape, f64, FnPrism<Shape, f64>>
//! // - Shape::rectangle_prism() -> SimplePrism<Shape, (f64, f64), FnPrism<Shape, (f64, f64)>>
//!
//! assert_eq!(Shape::circle_prism().preview(Shape::Circle(5.0)), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro generating a lens constructor for every struct field.
///
/// For each field `foo: T` the struct gets
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> SimpleLens<Self, T, FnLens<Self, T>> where T: Clone { ... }
/// }
/// ```
///
/// Viewing clones the field, so a lens is only available for `Clone`
/// fields.
///
/// # Requirements
///
/// - The struct must have named fields
///
/// # Example
///
/// ```rust,ignore
/// use optica::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
///
/// assert_eq!(Person::name_lens().view(person.clone()), "Alice");
/// let updated = Person::age_lens().over(person, |age| age + 1);
/// assert_eq!(updated.age, 31);
/// ```
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.view(Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro generating a prism constructor for every enum variant.
///
/// The method name is `{variant_name_snake_case}_prism()`. The focus type
/// depends on the variant:
///
/// - **Unit variants** (e.g., `Empty`): `()`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `T`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `(i32, i32)`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): the fields as a
///   tuple in definition order
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
///     Point,
/// }
///
/// assert_eq!(Shape::circle_prism().preview(Shape::Circle(5.0)), Some(5.0));
/// assert_eq!(Shape::rectangle_prism().preview(Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
/// assert_eq!(Shape::point_prism().review(()), Shape::Point);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
