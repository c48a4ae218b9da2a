use std::num::NonZero;

/// The length of an inhabited list. Wrapping [`NonZero`] means an empty list is unrepresentable
/// here; emptiness lives in the state enum instead.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(len) => match NonZero::new(len) {
                Some(len) => Some(Length(len)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const unsafe fn new_unchecked(value: usize) -> Length {
        // SAFETY: The caller guarantees value is nonzero.
        Length(unsafe { NonZero::new_unchecked(value) })
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
