use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated through Box and released through take_node, which moves the whole Node back
// out of the heap so the caller can keep the value after the allocation is gone.

/// A copyable handle to a heap-allocated [`Node`]. Aliasing is unchecked: the list is responsible
/// for never holding two handles to a node it is about to free.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Every NodePtr comes from from_node and stays valid until take_node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, and the &mut self receiver keeps the borrow unique.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Every NodePtr comes from from_node and stays valid until take_node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above. Callers patch links through at most one handle at a time.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and is freed exactly once, here.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A single link in the chain: one value and the link to its successor, or [`None`] at the tail.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
