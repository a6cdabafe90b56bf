//! Human-readable listing of a heap's storage, for debugging.

use core::fmt::{self, Write};

use super::Heap;

impl<T, C> Heap<T, C> {
    /// Writes a listing of the heap to `out`: a header with the size and
    /// capacity, then one `[index] element` line per element in storage
    /// order. `print` writes the representation of a single element.
    ///
    /// This does not touch the heap's state.
    ///
    /// ```
    /// use coppice::{Heap, OrdComparator};
    /// use std::fmt::Write;
    ///
    /// let heap = Heap::from_vec(vec![1, 3, 2], OrdComparator::new());
    /// let mut out = String::new();
    /// heap.dump(&mut out, |w: &mut dyn Write, x: &i32| write!(w, "{x}")).unwrap();
    ///
    /// let lines: Vec<_> = out.lines().skip(1).collect();
    /// assert_eq!(lines, ["[0] 3", "[1] 1", "[2] 2"]);
    /// ```
    pub fn dump<W, F>(&self, out: &mut W, print: F) -> fmt::Result
    where
        W: Write,
        F: Fn(&mut dyn Write, &T) -> fmt::Result,
    {
        writeln!(out, "Heap(size={}, cap={}):", self.len(), self.capacity())?;
        for (i, item) in self.iter().enumerate() {
            write!(out, "[{i}] ")?;
            print(&mut *out, item)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders the same
    /// listing as [`dump`](Heap::dump).
    pub fn tree<F>(&self, print: F) -> Tree<'_, T, C, F>
    where
        F: Fn(&mut dyn Write, &T) -> fmt::Result,
    {
        Tree { heap: self, print }
    }

    /// Writes the [`dump`](Heap::dump) listing to standard error.
    ///
    /// Failures to write are ignored.
    #[cfg(feature = "std")]
    pub fn debug_print<F>(&self, print: F)
    where
        F: Fn(&mut dyn Write, &T) -> fmt::Result,
    {
        use std::io::Write as _;

        let mut listing = alloc::string::String::new();
        if self.dump(&mut listing, print).is_ok() {
            let _ = std::io::stderr().lock().write_all(listing.as_bytes());
        }
    }
}

/// Renders a heap's storage listing.
///
/// This `struct` is created by [`Heap::tree()`]. See its documentation for
/// more.
pub struct Tree<'a, T, C, F> {
    heap: &'a Heap<T, C>,
    print: F,
}

impl<T, C, F> fmt::Display for Tree<'_, T, C, F>
where
    F: Fn(&mut dyn Write, &T) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.heap.dump(f, &self.print)
    }
}

impl<T, C, F> fmt::Debug for Tree<'_, T, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("len", &self.heap.len()).finish_non_exhaustive()
    }
}
