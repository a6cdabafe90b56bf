//! The ordering capability a [`Heap`](crate::Heap) is parameterized over.

use core::cmp::Ordering;

/// A priority ordering over `T`.
///
/// `compare(a, b)` returns [`Ordering::Greater`] when `a` has strictly higher
/// priority than `b`, [`Ordering::Equal`] when they have equal priority and
/// [`Ordering::Less`] otherwise. The element that compares greatest sits at
/// the root of the heap.
///
/// Implementations must be a strict weak order. A comparator that is not (for
/// example one that is not transitive) yields an unspecified heap shape and
/// unspecified extraction order, but never undefined behavior.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use coppice::Comparator;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"heap", &"sift"), Ordering::Equal);
/// assert!(by_len.outranks(&"heapify", &"heap"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares the priorities of `a` and `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Whether `a` has strictly higher priority than `b`.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Inverts the priority decided by the wrapped comparator, turning a max-heap
/// into a min-heap and vice versa.
///
/// ```
/// use coppice::{Heap, ReverseComparator};
///
/// let shortest_first = ReverseComparator(|a: &String, b: &String| a.len().cmp(&b.len()));
/// let mut heap = Heap::new(shortest_first);
/// heap.insert("sift".to_owned()).unwrap();
/// heap.insert("up".to_owned()).unwrap();
/// assert_eq!(heap.peek().map(String::as_str), Some("up"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseComparator<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseComparator<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
