//! Comparators that defer to the [`Ord`] implementation of the element type,
//! making a [`Heap`](crate::Heap) behave like the standard library's
//! `BinaryHeap` (max-heap) or its `Reverse`-wrapped counterpart (min-heap).

use crate::{Comparator, ReverseComparator};
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized comparator that delegates to the [`Ord`] implementation of
/// its type parameter `T`. Greater values have higher priority, so a heap
/// using it is a max-heap.
pub struct OrdComparator<T: ?Sized>(PhantomData<fn(&T)>);

/// A zero-sized comparator under which smaller values have higher priority.
pub type MinComparator<T> = ReverseComparator<OrdComparator<T>>;

impl<T: ?Sized> OrdComparator<T> {
    /// Creates the comparator.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdComparator<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdComparator<T> {}

impl<T: ?Sized> fmt::Debug for OrdComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdComparator")
    }
}

impl<T: ?Sized + Ord> Comparator<T> for OrdComparator<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    // Overridden so that a `T` whose `PartialOrd` disagrees with its `Ord`
    // is still judged the way `BinaryHeap` would judge it.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
