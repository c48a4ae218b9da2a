use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// The three-way comparison function held by a [`Comparator`].
pub type CompareFn<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// A pluggable comparison strategy: one three-way comparison function, with equality and every
/// ordering predicate derived from its sign.
///
/// # Sharing
/// The function lives in a shared slot. [`Clone`] hands out another handle to the *same* slot, and
/// [`reverse`](Comparator::reverse) rewrites the slot in place, so a reversal performed through
/// any handle is observed by all of them — including every [`LinkedList`](crate::LinkedList)
/// holding one. Two independently constructed comparators never share a slot, even if they were
/// built from the same function.
///
/// # Contract
/// The held function must describe a total order. Nothing checks this: an inconsistent function
/// (say, one that never returns [`Ordering::Equal`] symmetrically) simply makes the derived
/// predicates inconsistent in the same way. No comparison ever fails or panics.
pub struct Comparator<T> {
    slot: Rc<RefCell<CompareFn<T>>>,
}

impl<T> Comparator<T> {
    /// Creates a Comparator around a custom three-way comparison function.
    pub fn new(compare: impl Fn(&T, &T) -> Ordering + 'static) -> Comparator<T> {
        Comparator {
            slot: Rc::new(RefCell::new(Rc::new(compare))),
        }
    }

    /// Applies the held comparison function to `a` and `b`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        // The slot borrow has to end before the user function runs, otherwise a comparison that
        // calls reverse() on its own comparator would hit a live borrow.
        let compare = Rc::clone(&*self.slot.borrow());
        (*compare)(a, b)
    }

    /// Returns true if `a` and `b` compare as equal.
    pub fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }

    /// Returns true if `a` compares as strictly less than `b`.
    pub fn less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    /// Returns true if `a` compares as strictly greater than `b`.
    pub fn greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_gt()
    }

    /// Returns true if `a` compares as less than or equal to `b`.
    pub fn less_than_or_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_le()
    }

    /// Returns true if `a` compares as greater than or equal to `b`.
    pub fn greater_than_or_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_ge()
    }

    /// Reverses the sense of the comparison by replacing the held function `f` with
    /// `(a, b) -> f(b, a)`, flipping every derived predicate from this point on.
    ///
    /// The replacement happens inside the shared slot: every clone of this Comparator, and every
    /// list holding one, sees reversed comparisons afterwards. Reversing twice restores the
    /// original sense.
    pub fn reverse(&self)
    where
        T: 'static,
    {
        let mut slot = self.slot.borrow_mut();
        let original = Rc::clone(&*slot);
        *slot = Rc::new(move |a: &T, b: &T| (*original)(b, a));
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// Creates a Comparator using the natural total order of `T`.
    pub fn natural() -> Comparator<T> {
        Comparator::new(T::cmp)
    }
}

impl<T: Ord + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Comparator::natural()
    }
}

impl<T> Clone for Comparator<T> {
    /// Returns another handle to the same function slot. See the type docs: clones share
    /// reversals, they don't snapshot the current function.
    fn clone(&self) -> Self {
        Comparator {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Debug for Comparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
