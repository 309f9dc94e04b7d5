//! Fixed-capacity sequence container for Keel.
//!
//! [`FixedArray<T, N>`] holds exactly `N` elements inline, with no heap
//! allocation and no size field. It is a thin wrapper over `[T; N]` that
//! adds contract-checked indexing, a uniform size/capacity query set and
//! value semantics for copy, compare and hash.
//!
//! # Contract
//!
//! - `N` is at least one; `FixedArray<T, 0>` fails to compile as soon as
//!   it is constructed.
//! - Indexing outside `0..N` through `[]` or [`at`](FixedArray::at) is a
//!   contract violation reported through [`keel_core::fatal`].
//! - Equality is element-wise. Ordering is lexicographic: the first
//!   differing element decides.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod cmp;
pub mod convert;
pub mod iter;

// Public re-exports for the primary API surface.
pub use array::{swap, FixedArray};
pub use convert::to_array;
