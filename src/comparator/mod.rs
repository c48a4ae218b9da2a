//! A module containing [`Comparator`] and associtated types.
//!
//! [`Comparator`] wraps a three-way comparison function in a shared, mutable slot and derives the
//! full family of ordering predicates from it. It has no knowledge of any collection; [`LinkedList`]
//! (and anything else) consumes it purely through [`Comparator::equal`] and friends.
//!
//! [`Comparator`] is also re-exported at the crate root.
//!
//! [`LinkedList`]: crate::LinkedList

mod comparator;

pub use comparator::*;
