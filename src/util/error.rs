use derive_more::{Display, Error};

/// An [`Error`](std::error::Error) for when an index is outside the bounds of a collection.
#[derive(Debug, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// An [`Error`](std::error::Error) for when a collection's length would overflow [`usize`].
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
