use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::comparator::Comparator;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A singly linked list that routes every value comparison through a [`Comparator`].
///
/// Searching ([`find`](LinkedList::find), [`contains`](LinkedList::contains),
/// [`index_of`](LinkedList::index_of)) and value-based removal
/// ([`remove_all`](LinkedList::remove_all)) ask the held comparator for equality instead of
/// requiring `T: PartialEq`. [`find_by`](LinkedList::find_by) is the comparator-free alternative
/// for predicate searches. The comparator is shared, not copied: see [`Comparator`] for the
/// aliasing rules, in particular what [`Comparator::reverse`] does to every list holding a clone
/// of the same comparator.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `find/find_by` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// The chain only links forwards, which is what makes `pop_back` linear: the node before the tail
/// can only be found by rescanning from the head. Every linear operation here is also a chain of
/// cache misses, so prefer a contiguous collection unless the `O(1)` end operations or the
/// comparator routing are the point.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) compare: Comparator<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T: Ord + 'static> LinkedList<T> {
    /// Creates a new LinkedList with no elements, comparing by the natural order of `T`.
    pub fn new() -> LinkedList<T> {
        LinkedList::with_comparator(Comparator::natural())
    }
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements, comparing through the provided [`Comparator`].
    ///
    /// The comparator is held by handle: constructing two lists over clones of one comparator
    /// makes them share it, reversals included.
    pub fn with_comparator(compare: Comparator<T>) -> LinkedList<T> {
        LinkedList {
            state: Empty,
            compare,
            _phantom: PhantomData,
        }
    }

    /// Creates a new LinkedList with no elements, comparing through a custom three-way function.
    pub fn with_compare_fn(compare: impl Fn(&T, &T) -> Ordering + 'static) -> LinkedList<T> {
        LinkedList::with_comparator(Comparator::new(compare))
    }

    /// Returns a handle to the list's comparator. Reversing through it affects this list and
    /// every other holder of the same comparator.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.compare
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The previous length was at least 2, so the head has a successor.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// This is `O(n)`: without backward links the node before the tail has to be found by
    /// rescanning from the head.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, tail }) => match len.checked_sub(1) {
                Some(new_len) => {
                    let mut curr = *head;
                    while let Some(next) = *curr.next() {
                        if next.next().is_none() {
                            break;
                        }
                        curr = next;
                    }

                    // curr is now the node before the tail.
                    let node = tail.take_node();
                    *curr.next_mut() = None;
                    *tail = curr;
                    *len = new_len;

                    Some(node.value)
                },
                None => {
                    let node = tail.take_node();
                    self.state = Empty;

                    Some(node.value)
                },
            },
        }
    }

    /// Removes every element that the comparator reports as equal to `value`, returning the value
    /// of the last matching node in head-to-tail order, or [`None`] if nothing matched.
    ///
    /// Matches are unlinked during a single forward sweep: a leading run of matches moves the
    /// head forward, later matches are cut out by their predecessor, and the tail ends up on the
    /// last surviving node. Each match overwrites the returned candidate, which is why the *last*
    /// match is the one handed back rather than the first.
    pub fn remove_all(&mut self, value: &T) -> Option<T> {
        let Full(mut contents) = mem::take(&mut self.state) else {
            return None;
        };

        let mut removed = None;
        let mut len = contents.len.get();

        // Shed the run of matches at the head first, so the head lands on a survivor before any
        // inner links are patched.
        let mut head = Some(contents.head);
        while let Some(node_ptr) = head {
            if !self.compare.equal(node_ptr.value(), value) {
                break;
            }
            let node = node_ptr.take_node();
            removed = Some(node.value);
            head = node.next;
            len -= 1;
        }

        let Some(new_head) = head else {
            // Every node matched; the list stays empty.
            return removed;
        };
        contents.head = new_head;

        // Cut matches out of the rest of the chain through their predecessor's link.
        let mut curr = new_head;
        while let Some(next) = *curr.next() {
            if self.compare.equal(next.value(), value) {
                let node = next.take_node();
                *curr.next_mut() = node.next;
                removed = Some(node.value);
                len -= 1;
            } else {
                curr = next;
            }
        }

        // The sweep ends on the last surviving node, which is the new tail.
        contents.tail = curr;
        // SAFETY: At least one node survived the sweep, so the new length is nonzero.
        contents.len = unsafe { Length::new_unchecked(len) };
        self.state = Full(contents);

        removed
    }

    /// Returns a reference to the first element that the comparator reports as equal to `value`,
    /// or [`None`] if there is no match.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.find_by(|element| self.compare.equal(element, value))
    }

    /// Returns a reference to the first element satisfying `predicate`, or [`None`] if there is
    /// no match. The comparator is not consulted.
    pub fn find_by(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        let Full(contents) = &self.state else {
            return None;
        };

        let mut curr = Some(contents.head);
        while let Some(node) = curr {
            if predicate(node.value()) {
                return Some(node.value());
            }
            curr = *node.next();
        }
        None
    }

    /// Returns true if the comparator reports some element as equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the position of the first element that the comparator reports as equal to
    /// `value`, if any.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if self.compare.equal(element, value) {
                return Some(index);
            }
        }
        None
    }

    /// Reverses the list in place in one forward pass, relinking every node to its predecessor
    /// and swapping head and tail. No nodes are created or destroyed; reversing twice restores
    /// the original order.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut prev = None;
            let mut curr = Some(contents.head);

            while let Some(node) = curr {
                let next = *node.next();
                *node.next_mut() = prev;
                prev = Some(node);
                curr = next;
            }

            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Renders the list as the elements joined by commas, each through the provided stringifier.
    /// An empty list renders as the empty string. See the [`Display`] impl for the default
    /// rendering.
    pub fn to_string_with(&self, mut stringify: impl FnMut(&T) -> String) -> String {
        self.iter()
            .map(|value| stringify(value))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let mut node = self.checked_seek(index)?;
        Ok(node.value_mut())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns the elements cloned into a [`Vec`], head first. Collecting [`iter`](LinkedList::iter)
    /// gives the borrowing equivalent.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: Callers have checked index against the length, so a successor exists.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

// The std derive would demand T: Default here, which mem::take callers can't provide.
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T: Ord + 'static> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T: Ord + 'static, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> LinkedList<T> {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Ord + 'static> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    /// Lists are equal when their element sequences are equal. The comparator takes no part in
    /// this: two lists over different comparators but the same elements are equal.
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // The lengths are equal, so the chains run out together.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: Hash> Hash for ListContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => {
                    node = *next;
                },
                _ => break,
            }
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.len())
            .field(
                "chain",
                &(self.iter().map(|value| format!("({value:?}) -> ")).collect::<String>()
                    + "None"),
            )
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}
