use thiserror::Error;

/// Errors reported by [`Heap`](crate::Heap) construction and growth.
///
/// An empty heap is not an error: [`extract`](crate::Heap::extract),
/// [`peek`](crate::Heap::peek) and [`replace`](crate::Heap::replace) report
/// absence through their return values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap was asked to be constructed without a comparator.
    #[error("a heap cannot be constructed without a comparator")]
    InvalidArgument,

    /// Backing storage for `requested` elements could not be allocated. The
    /// heap, if one already existed, is unchanged.
    #[error("failed to allocate backing storage for {requested} elements")]
    AllocationFailure {
        /// The capacity, in elements, that was being requested.
        requested: usize,
    },
}
