//! A binary heap whose priority is decided by a caller-supplied comparator
//! rather than by the [`Ord`] trait.
//!
//! The same [`Heap`] type serves as a max-heap, a min-heap or any other
//! strict-weak-order priority scheme, depending only on the [`Comparator`] it
//! is constructed with:
//!
//! ```
//! use coppice::{Heap, MinComparator};
//!
//! let mut heap = Heap::new(MinComparator::default());
//! heap.insert(5).unwrap();
//! heap.insert(1).unwrap();
//! heap.insert(3).unwrap();
//!
//! assert_eq!(heap.extract(), Some(1));
//! assert_eq!(heap.extract(), Some(3));
//! assert_eq!(heap.extract(), Some(5));
//! assert_eq!(heap.extract(), None);
//! ```
//!
//! Closures work as comparators too:
//!
//! ```
//! use coppice::Heap;
//!
//! // (priority, job id)
//! let jobs = vec![(2u8, 100u32), (9, 101), (1, 102)];
//! let mut heap = Heap::from_vec(jobs, |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0));
//! assert_eq!(heap.extract(), Some((9, 101)));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::needless_range_loop, clippy::useless_vec))]

extern crate alloc;

#[macro_use]
mod polyfill;

mod cmp;
mod default;
mod error;
pub mod heap;
mod sort;

pub use cmp::{Comparator, ReverseComparator};
pub use default::{MinComparator, OrdComparator};
pub use error::HeapError;
pub use heap::{Heap, DEFAULT_CAPACITY};
pub use sort::sort;
