//! A singly linked list driven by a pluggable comparison strategy.
//!
//! # Purpose
//! Most list types hardcode `==` and `<` into their search and removal operations. The
//! [`LinkedList`] here instead routes every value comparison through a [`Comparator`]: a shared,
//! swappable three-way comparison function. That makes "find the first element equal to x" and
//! "remove every element equal to x" answerable under whatever notion of equality the caller
//! supplies, without wrapping the element type in a newtype first.
//!
//! # Sharing
//! A [`Comparator`] is a handle to a shared function slot. Cloning it shares the slot rather than
//! snapshotting it, and [`Comparator::reverse`] rewrites the slot in place, so every list built
//! over a clone of the same comparator observes the reversal at once. This aliasing is deliberate
//! and documented on the type; see its docs before storing one comparator in several lists.
//!
//! # Error Handling
//! Absence is never an error here: searching for a missing value or popping from an empty list
//! returns [`None`]. [`Result`]s appear only on the indexed accessors, which come in panicking and
//! fallible pairs (`get` / `try_get`) with strongly typed errors rather than a boxed
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate leans on `std` for allocation and on derive macros for the repetitive trait
//! plumbing. There is no `unsafe`-free rendition of a linked list worth having, but the unsafe
//! surface is confined to the node handle type and every block carries its justification.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod comparator;
pub mod list;

pub(crate) mod util;

#[doc(inline)]
pub use comparator::Comparator;
#[doc(inline)]
pub use list::LinkedList;
