// Heap-order restoration over plain slices, shared by `Heap` and `sort`.
//
// All comparisons are strict: an element only moves when it *outranks* the
// one it would trade places with, so equal priorities never swap. When both
// children outrank their parent with equal priority, the left child is taken.

use crate::Comparator;

#[inline]
pub(crate) fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub(crate) fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub(crate) fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves the element at `pos` towards the root while it outranks its parent.
/// Returns its final position.
pub(crate) fn sift_up<T, C: Comparator<T> + ?Sized>(data: &mut [T], mut pos: usize, cmp: &C) -> usize {
    debug_assert!(pos < data.len());

    while pos > 0 {
        let p = parent(pos);
        if !cmp.outranks(&data[pos], &data[p]) {
            break;
        }
        data.swap(pos, p);
        pos = p;
    }

    pos
}

/// Moves the element at `pos` towards the leaves of the heap occupying
/// `data[..end]` while one of its children outranks it.
pub(crate) fn sift_down_range<T, C: Comparator<T> + ?Sized>(
    data: &mut [T],
    mut pos: usize,
    end: usize,
    cmp: &C,
) {
    debug_assert!(end <= data.len());

    loop {
        let (l, r) = (left(pos), right(pos));
        let mut best = pos;

        if l < end && cmp.outranks(&data[l], &data[best]) {
            best = l;
        }
        if r < end && cmp.outranks(&data[r], &data[best]) {
            best = r;
        }

        if best == pos {
            return;
        }
        data.swap(pos, best);
        pos = best;
    }
}

#[inline]
pub(crate) fn sift_down<T, C: Comparator<T> + ?Sized>(data: &mut [T], pos: usize, cmp: &C) {
    let end = data.len();
    sift_down_range(data, pos, end, cmp);
}

/// Floyd's bottom-up heap construction: every non-leaf, from the last one
/// back to the root, is sifted down. Linear in `data.len()`.
pub(crate) fn heapify<T, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    let mut n = data.len() / 2;
    while n > 0 {
        n -= 1;
        sift_down(data, n, cmp);
    }
}

/// Whether no element of `data` outranks its parent.
pub(crate) fn is_heap<T, C: Comparator<T> + ?Sized>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|i| !cmp.outranks(&data[i], &data[parent(i)]))
}
