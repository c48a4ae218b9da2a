//! A module containing [`LinkedList`] and associtated types.
//!
//! [`Iter`], [`IterMut`] and [`IntoIter`] provide borrowed and owned iteration over a list's
//! elements, in head-to-tail order only: the chain has no backward links, so none of the
//! iterators are double-ended.
//!
//! [`LinkedList`] is also re-exported at the crate root.

mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
