//! A priority queue implemented with an array-backed binary heap.
//!
//! Insertion, extraction and root replacement are *O*(log *n*); peeking is
//! *O*(1). Building a heap from *n* existing elements is *O*(*n*).
//!
//! Which element counts as "highest priority" is decided entirely by the
//! [`Comparator`] the heap is constructed with: see [`OrdComparator`] for a
//! max-heap, [`MinComparator`] for a min-heap, or pass any
//! `Fn(&T, &T) -> Ordering`.
//!
//! # Examples
//!
//! Using `Heap` as the frontier of Dijkstra's shortest path search:
//!
//! ```
//! use coppice::Heap;
//!
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! fn shortest_path(adj_list: &[Vec<Edge>], start: usize, goal: usize) -> Option<usize> {
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!
//!     // (cost, position), cheapest first
//!     let mut heap = Heap::new(|a: &(usize, usize), b: &(usize, usize)| b.0.cmp(&a.0));
//!
//!     dist[start] = 0;
//!     heap.insert((0, start)).ok()?;
//!
//!     while let Some((cost, position)) = heap.extract() {
//!         if position == goal {
//!             return Some(cost);
//!         }
//!         if cost > dist[position] {
//!             continue;
//!         }
//!         for edge in &adj_list[position] {
//!             let next = (cost + edge.cost, edge.node);
//!             if next.0 < dist[next.1] {
//!                 heap.insert(next).ok()?;
//!                 dist[next.1] = next.0;
//!             }
//!         }
//!     }
//!
//!     None
//! }
//!
//! let graph = vec![
//!     vec![Edge { node: 2, cost: 10 }, Edge { node: 1, cost: 1 }],
//!     vec![Edge { node: 3, cost: 2 }],
//!     vec![Edge { node: 1, cost: 1 }, Edge { node: 3, cost: 3 }, Edge { node: 4, cost: 1 }],
//!     vec![Edge { node: 0, cost: 7 }, Edge { node: 4, cost: 2 }],
//!     vec![],
//! ];
//!
//! assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//! assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//! assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//! assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//! assert_eq!(shortest_path(&graph, 4, 0), None);
//! ```
//!
//! [`OrdComparator`]: crate::OrdComparator
//! [`MinComparator`]: crate::MinComparator

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::{Comparator, HeapError};

mod dump;
mod iter;
pub(crate) mod sift;

pub use dump::Tree;
pub use iter::{IntoIter, Iter};


/// Capacity allocated when a heap is created with a capacity hint of zero, and
/// the first growth step of a heap that has no storage yet.
pub const DEFAULT_CAPACITY: usize = 16;

/// A priority queue implemented with a binary heap, ordered by a comparator.
///
/// The root (see [`peek`]) is always an element of highest priority under the
/// comparator `C`.
///
/// It is a logic error for an item to be modified in such a way that its
/// priority relative to any other item, as determined by the comparator,
/// changes while it is in the heap. This is normally only possible through
/// interior mutability, global state, I/O, or a comparator that is not a
/// strict weak order. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `Heap` that observed it: it may
/// produce an invalid heap shape (see [`validate`]) or unexpected extraction
/// order, but never memory unsafety.
///
/// The heap owns its backing storage and the `T` values placed in it. To keep
/// payload ownership with the caller, store shared handles such as `&X`,
/// [`Rc<X>`](alloc::rc::Rc) or [`Arc<X>`](alloc::sync::Arc); cloning the heap
/// then copies the handles, not the payloads.
///
/// # Examples
///
/// ```
/// use coppice::{Heap, OrdComparator};
///
/// let mut heap = Heap::new(OrdComparator::default());
///
/// // There's nothing to look at yet.
/// assert_eq!(heap.peek(), None);
///
/// heap.insert(1).unwrap();
/// heap.insert(5).unwrap();
/// heap.insert(2).unwrap();
///
/// // The root is the highest-priority item.
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// // Iteration visits items in storage order, not priority order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // Extraction does follow priority order.
/// assert_eq!(heap.extract(), Some(5));
/// assert_eq!(heap.extract(), Some(2));
/// assert_eq!(heap.extract(), Some(1));
/// assert_eq!(heap.extract(), None);
/// ```
///
/// # Time complexity
///
/// | [insert]   | [extract]     | [replace]     | [peek] | [build] |
/// |------------|---------------|---------------|--------|---------|
/// | *O*(log *n*)~ | *O*(log *n*) | *O*(log *n*) | *O*(1) | *O*(*n*) |
///
/// The cost of `insert` is amortized: a single call that has to grow the
/// storage costs *O*(*n*), but capacity doubles on each growth.
///
/// [`peek`]: Heap::peek
/// [`validate`]: Heap::validate
/// [insert]: Heap::insert
/// [extract]: Heap::extract
/// [replace]: Heap::replace
/// [peek]: Heap::peek
/// [build]: Heap::build
pub struct Heap<T, C> {
    data: Vec<T>,
    comparator: C,
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates an empty heap. No storage is allocated until the first
    /// insertion, which allocates [`DEFAULT_CAPACITY`] slots.
    ///
    /// ```
    /// use coppice::{Heap, MinComparator};
    ///
    /// let mut heap = Heap::new(MinComparator::default());
    /// heap.insert(4).unwrap();
    /// assert_eq!(heap.capacity(), coppice::DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Heap { data: Vec::new(), comparator }
    }

    /// Creates an empty heap from an optional comparator.
    ///
    /// A `capacity_hint` of zero allocates [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArgument`] if `comparator` is `None`;
    /// [`HeapError::AllocationFailure`] if the storage cannot be allocated.
    ///
    /// ```
    /// use coppice::{Heap, HeapError, OrdComparator};
    ///
    /// let heap = Heap::<u8, _>::create(Some(OrdComparator::new()), 0).unwrap();
    /// assert!(heap.capacity() >= 16);
    ///
    /// let missing = Heap::<u8, OrdComparator<u8>>::create(None, 0);
    /// assert_eq!(missing.err(), Some(HeapError::InvalidArgument));
    /// ```
    pub fn create(comparator: Option<C>, capacity_hint: usize) -> Result<Self, HeapError> {
        let comparator = comparator.ok_or(HeapError::InvalidArgument)?;
        Self::with_capacity(comparator, capacity_hint)
    }

    /// Creates an empty heap with room for at least `capacity_hint` elements,
    /// or [`DEFAULT_CAPACITY`] if the hint is zero.
    ///
    /// # Errors
    ///
    /// [`HeapError::AllocationFailure`] if the storage cannot be allocated.
    pub fn with_capacity(comparator: C, capacity_hint: usize) -> Result<Self, HeapError> {
        let capacity = if capacity_hint == 0 { DEFAULT_CAPACITY } else { capacity_hint };
        let mut heap = Self::new(comparator);
        heap.reserve(capacity)?;
        Ok(heap)
    }

    /// Builds a heap holding copies of `elements`, ordered by `comparator`.
    ///
    /// The copies are placed in storage of exactly `elements.len()` slots and
    /// then heapified bottom-up, which takes *O*(*n*) comparisons rather than
    /// the *O*(*n* log *n*) of inserting them one by one.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArgument`] if `comparator` is `None`;
    /// [`HeapError::AllocationFailure`] if the storage cannot be allocated.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let mut heap = Heap::build(&[5, 2, 9, 1, 6, 7, 3], Some(OrdComparator::new())).unwrap();
    /// assert!(heap.validate());
    /// assert_eq!(heap.extract(), Some(9));
    /// ```
    pub fn build(elements: &[T], comparator: Option<C>) -> Result<Self, HeapError>
    where
        T: Clone,
    {
        let comparator = comparator.ok_or(HeapError::InvalidArgument)?;

        let mut data = Vec::new();
        data.try_reserve_exact(elements.len())
            .map_err(|_| HeapError::AllocationFailure { requested: elements.len() })?;
        data.extend_from_slice(elements);

        Ok(Self::from_vec(data, comparator))
    }

    /// Turns `data` into a heap in place, without copying its elements.
    ///
    /// ```
    /// use coppice::{Heap, MinComparator};
    ///
    /// let heap = Heap::from_vec(vec![3, 1, 2], MinComparator::default());
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn from_vec(data: Vec<T>, comparator: C) -> Self {
        let mut heap = Heap { data, comparator };
        heap.rebuild();
        heap
    }

    /// Inserts `item`, doubling the storage first if it is full.
    ///
    /// # Errors
    ///
    /// If the storage had to grow and could not, returns
    /// [`HeapError::AllocationFailure`] together with `item`. The heap is left
    /// exactly as it was.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let mut heap = Heap::new(OrdComparator::new());
    /// heap.insert(3).unwrap();
    /// heap.insert(5).unwrap();
    /// heap.insert(1).unwrap();
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), (HeapError, T)> {
        if self.data.len() == self.data.capacity() {
            if let Err(err) = self.grow() {
                return Err((err, item));
            }
        }

        let pos = self.data.len();
        self.data.push(item);
        sift::sift_up(&mut self.data, pos, &self.comparator);
        Ok(())
    }

    /// Removes the root and returns it, or `None` if the heap is empty.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let mut heap = Heap::from_vec(vec![1, 3], OrdComparator::new());
    ///
    /// assert_eq!(heap.extract(), Some(3));
    /// assert_eq!(heap.extract(), Some(1));
    /// assert_eq!(heap.extract(), None);
    /// ```
    pub fn extract(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.data.is_empty() {
                mem::swap(&mut item, &mut self.data[0]);
                sift::sift_down(&mut self.data, 0, &self.comparator);
            }
            item
        })
    }

    /// Replaces the root with `item` and returns the old root.
    ///
    /// This is equivalent to [`extract`] followed by [`insert`], but restores
    /// the heap with a single sift and never allocates.
    ///
    /// # Errors
    ///
    /// If the heap is empty there is no root to replace: `item` is handed
    /// back as `Err(item)` and the heap is not touched.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let mut heap = Heap::new(OrdComparator::new());
    /// assert_eq!(heap.replace(4), Err(4));
    ///
    /// heap.insert(7).unwrap();
    /// heap.insert(2).unwrap();
    /// assert_eq!(heap.replace(1), Ok(7));
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// [`extract`]: Heap::extract
    /// [`insert`]: Heap::insert
    pub fn replace(&mut self, item: T) -> Result<T, T> {
        match self.data.first_mut() {
            Some(root) => {
                let old = mem::replace(root, item);
                sift::sift_down(&mut self.data, 0, &self.comparator);
                Ok(old)
            }
            None => Err(item),
        }
    }

    /// Checks that no element outranks its parent.
    ///
    /// This walks the whole heap and is meant for diagnostics and tests. It can
    /// only return `false` if the comparator is not a strict weak order or an
    /// element's priority changed while it was in the heap.
    #[must_use]
    pub fn validate(&self) -> bool {
        sift::is_heap(&self.data, &self.comparator)
    }

    /// Consumes the heap and returns its elements in ascending priority
    /// order: the root comes last.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let mut heap = Heap::from_vec(vec![1, 2, 4, 5, 7], OrdComparator::new());
    /// heap.insert(6).unwrap();
    /// heap.insert(3).unwrap();
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            sift::sift_down_range(&mut self.data, 0, end, &self.comparator);
        }
        self.into_vec()
    }

    /// Makes a structurally independent copy of the heap.
    ///
    /// The copy has the same capacity as `self`; its elements are clones of
    /// `self`'s, so for handle types such as `Rc` both heaps refer to the same
    /// payloads while mutating one heap never affects the other.
    ///
    /// # Errors
    ///
    /// [`HeapError::AllocationFailure`] if the copy's storage cannot be
    /// allocated.
    pub fn try_clone(&self) -> Result<Self, HeapError>
    where
        T: Clone,
        C: Clone,
    {
        let capacity = self.data.capacity();
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailure { requested: capacity })?;
        data.extend_from_slice(&self.data);
        Ok(Heap { data, comparator: self.comparator.clone() })
    }

    fn rebuild(&mut self) {
        sift::heapify(&mut self.data, &self.comparator);
    }

    fn grow(&mut self) -> Result<(), HeapError> {
        let capacity = self.data.capacity();
        let target = grown_capacity(capacity)
            .ok_or(HeapError::AllocationFailure { requested: usize::MAX })?;
        trace_storage!("growing heap storage from {} to {} slots", capacity, target);
        self.reserve(target)
    }
}

/// The capacity a full heap grows to, or `None` if doubling overflows.
fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(DEFAULT_CAPACITY)
    } else {
        capacity.checked_mul(2)
    }
}

impl<T, C> Heap<T, C> {
    /// Returns the root, an element of highest priority, or `None` if the
    /// heap is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Borrows the heap's comparator.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Ensures the heap can hold at least `capacity` elements in total.
    /// Does nothing if it already can.
    ///
    /// # Errors
    ///
    /// [`HeapError::AllocationFailure`] if the storage cannot grow, including
    /// when `capacity` elements would not fit in the address space. The heap
    /// keeps its elements and its previous capacity.
    ///
    /// ```
    /// use coppice::{Heap, HeapError, OrdComparator};
    ///
    /// let mut heap = Heap::new(OrdComparator::<u64>::new());
    /// heap.reserve(100).unwrap();
    /// assert!(heap.capacity() >= 100);
    ///
    /// assert_eq!(
    ///     heap.reserve(usize::MAX),
    ///     Err(HeapError::AllocationFailure { requested: usize::MAX }),
    /// );
    /// assert!(heap.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), HeapError> {
        if self.data.capacity() >= capacity {
            return Ok(());
        }

        let additional = capacity - self.data.len();
        self.data.try_reserve_exact(additional).map_err(|_| {
            debug_storage!("failed to reserve heap storage for {} slots", capacity);
            HeapError::AllocationFailure { requested: capacity }
        })
    }

    /// Shrinks the capacity to the current length.
    ///
    /// This is best effort: if the smaller storage cannot be allocated the
    /// heap silently keeps its current capacity.
    pub fn trim(&mut self) {
        let len = self.data.len();
        if self.data.capacity() == len {
            return;
        }

        let mut trimmed = Vec::new();
        if trimmed.try_reserve_exact(len).is_err() {
            debug_storage!("failed to trim heap storage to {} slots", len);
            return;
        }
        trace_storage!("trimming heap storage from {} to {} slots", self.data.capacity(), len);
        trimmed.append(&mut self.data);
        self.data = trimmed;
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements in storage order.
    ///
    /// Storage order is the heap's array layout: the root comes first, but
    /// the rest follows no priority order.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let heap = Heap::from_vec(vec![1, 2, 3, 4], OrdComparator::new());
    /// let mut seen: Vec<_> = heap.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, [1, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.iter())
    }

    /// Consumes the heap and returns its storage, in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend_from_slice(&self.data);
        Heap { data, comparator: self.comparator.clone() }
    }
}

impl<T, C: Comparator<T> + Default> Default for Heap<T, C> {
    /// Creates an empty heap with the default comparator.
    fn default() -> Self {
        Heap::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for Heap<T, C> {
    /// Converts a `Vec<T>` into a heap ordered by the default comparator.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Self {
        Heap::from_vec(vec, C::default())
    }
}

impl<T, C: Comparator<T> + Default, const N: usize> From<[T; N]> for Heap<T, C> {
    /// ```
    /// use coppice::{Heap, OrdComparator};
    ///
    /// let heap: Heap<_, OrdComparator<_>> = Heap::from([1, 5, 2]);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, C> From<Heap<T, C>> for Vec<T> {
    /// Converts a heap into its storage, in storage order, without copying.
    fn from(heap: Heap<T, C>) -> Vec<T> {
        heap.data
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C> IntoIterator for Heap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each element out of the heap
    /// in storage order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.data.into_iter())
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
