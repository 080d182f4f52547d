//! Optics for immutable data manipulation.
//!
//! Every optic is an [`Optic`] value tagged with a kind from
//! [`crate::kind`] and an index list from [`crate::index`]. The kind decides
//! which eliminators are available and what composing two optics yields.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Equality        <: Iso
//! Iso             <: Lens, Prism, ReversedLens, ReversedPrism
//! Lens            <: AffineTraversal, Getter
//! Prism           <: AffineTraversal, Review
//! ReversedPrism   <: Getter
//! ReversedLens    <: Review
//! AffineTraversal <: Traversal, AffineFold
//! Getter          <: AffineFold <: Fold
//! Traversal       <: Fold, Setter
//! ```
//!
//! # Eliminators
//!
//! | Operation | Least kind |
//! |---|---|
//! | `view` | Getter |
//! | `preview` | `AffineFold` |
//! | `to_vec`, `fold`, `length`, `first`, `last` | Fold |
//! | `traverse` | Traversal |
//! | `over`, `set` | Setter |
//! | `review` | Review |
//! | `matching`, `with_prism` | Prism |
//! | `with_iso` | Iso |
//!
//! # Example with Lens
//!
//! ```
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address) % lens!(Address, street);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.view(person.clone()), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Traversal
//!
//! ```
//! use optica::optics::{fst, traversed};
//!
//! let firsts = traversed::<(i32, char), (i32, char)>() % fst::<i32, i32, char>();
//!
//! let doubled = firsts.over(vec![(1, 'a'), (2, 'b')], |n| n * 2);
//! assert_eq!(doubled, vec![(2, 'a'), (4, 'b')]);
//! assert_eq!(firsts.to_vec(doubled), vec![2, 4]);
//! ```

mod affine_fold;
mod affine_traversal;
mod compose;
mod equality;
mod fold;
mod getter;
mod indexed;
mod iso;
mod lens;
mod optic;
mod prism;
mod reversed;
mod review;
mod setter;
mod standard_optics;
mod traversal;

pub use affine_fold::{AffineFold, AfoldingRepr, afolding};
pub use affine_traversal::{
    AffineRepr, AffineTraversal, FilteredRepr, SimpleAffineTraversal, affine_traversal, filtered,
    simple_affine_traversal,
};
pub use compose::{Composed, ComposedOptic};
pub use equality::{Equality, EqualityRepr, equality};
pub use fold::{Fold, FoldingRepr, folding};
pub use getter::{Getter, ToRepr, to};
pub use indexed::{
    IfoldingRepr, IndicesRepr, IsetsRepr, IxAffineFold, IxAffineTraversal, IxFold, IxGetter,
    IxLens, IxSetter, IxTraversal, IxTraversalRepr, ReindexRepr, ifolding, isets, itraversal,
};
pub use iso::{
    FnIso, Function, InvolutedRepr, Iso, IsoRepr, MappingRepr, SimpleIso, Swapped, coerced,
    curried, flipped, involuted, iso, mapping, swapped, uncurried,
};
pub use lens::{FnLens, Lens, LensRepr, SimpleLens, lens};
pub use optic::{Optic, Transform};
pub use prism::{FnPrism, Prism, PrismRepr, SimplePrism, prism, simple_prism};
pub use reversed::ReversedRepr;
pub use review::{Review, UntoRepr, unto};
pub use setter::{SetsRepr, Setter, sets};
pub use standard_optics::{
    chars, err, fst, folded, head, ichars, ifolded, itraversed, left, mapped, ok, right, snd,
    some, traversed,
};
pub use traversal::{SimpleTraversal, Traversal, TraversalRepr, traversal};
