//! Core contract and hashing glue for the Keel ownership primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by `keel-array` and `keel-handle`:
//!
//! - [`ContractViolation`]: the single error taxonomy (precondition
//!   violations only; there is no recoverable error kind).
//! - [`contract::fatal`]: the funnel every precondition check reports
//!   through before execution halts.
//! - [`ContractConfig`]: process-wide policy controlling how a
//!   violation halts and whether it is logged.
//! - [`hash`]: FNV-1a hashing used to key hash containers by value or
//!   by owned address.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod contract;
pub mod error;
pub mod hash;

// Public re-exports for the primary API surface.
pub use config::{ContractConfig, ViolationHook, ViolationPolicy};
pub use contract::{check_index, fatal};
pub use error::ContractViolation;
pub use hash::{hash_combine, make_hash, FnvBuildHasher, FnvHasher};
