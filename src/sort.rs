use crate::heap::sift;
use crate::Comparator;

/// Sorts `elements` in place with heapsort, in ascending priority order: the
/// element of highest priority under `comparator` ends up last.
///
/// The slice is first heapified in place, then its root is repeatedly swapped
/// behind the shrinking heap region. The sort is not stable and allocates
/// nothing; it takes *O*(*n* log *n*) comparisons.
///
/// ```
/// use coppice::{sort, MinComparator, OrdComparator};
///
/// let mut v = [5, 2, 9, 1, 6, 7, 3];
/// sort(&mut v, OrdComparator::new());
/// assert_eq!(v, [1, 2, 3, 5, 6, 7, 9]);
///
/// sort(&mut v, MinComparator::default());
/// assert_eq!(v, [9, 7, 6, 5, 3, 2, 1]);
/// ```
pub fn sort<T, C: Comparator<T>>(elements: &mut [T], comparator: C) {
    sift::heapify(elements, &comparator);

    let mut end = elements.len();
    while end > 1 {
        end -= 1;
        elements.swap(0, end);
        sift::sift_down_range(elements, 0, end, &comparator);
    }
}
