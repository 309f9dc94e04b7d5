//! Keel: allocation-avoiding ownership primitives for constrained targets.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Keel sub-crates. For most users, adding `keel` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // Inline storage, contract-checked indexing, lexicographic ordering.
//! let mut palette = FixedArray::new([0u16; 4]);
//! palette[1] = 0x7fff;
//! assert_eq!(palette.len(), 4);
//! assert!(palette > FixedArray::new([0u16; 4]));
//!
//! // A single owner for a heap object, generalized to a trait object.
//! trait Layer {
//!     fn priority(&self) -> u8;
//! }
//! struct Background;
//! impl Layer for Background {
//!     fn priority(&self) -> u8 { 3 }
//! }
//! keel::upcast!(Background => dyn Layer);
//!
//! let layer: UniqueHandle<dyn Layer> = make_unique(Background).into_base();
//! assert_eq!(layer.priority(), 3);
//! assert!(layer != Null);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`contract`] | `keel-core` | Violation taxonomy, policy configuration, FNV hashing |
//! | [`array`] | `keel-array` | `FixedArray` and its free functions |
//! | [`handle`] | `keel-handle` | `UniqueHandle`, deleters, conversion capability |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Contract checking, configuration and hashing (`keel-core`).
///
/// Install a [`contract::ContractConfig`] to choose whether violations
/// panic or abort, and whether debug builds log them.
pub use keel_core as contract;

/// Fixed-capacity sequence container (`keel-array`).
///
/// [`array::FixedArray`] plus the free functions [`array::swap`] and
/// [`array::to_array`].
pub use keel_array as array;

/// Single-owner object handles (`keel-handle`).
///
/// [`handle::UniqueHandle`] with pluggable [`handle::Deleter`] policies
/// and the [`handle::Upcast`] capability for generalized conversion.
pub use keel_handle as handle;

pub use keel_handle::upcast;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use keel_array::{to_array, FixedArray};

    // Handles
    pub use keel_handle::{make_unique, make_unique_with, Deleter, Null, UniqueHandle, Upcast};

    // Contract
    pub use keel_core::{ContractConfig, ContractViolation, ViolationPolicy};
}
