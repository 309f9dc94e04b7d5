//! Precondition-violation taxonomy.
//!
//! Every error condition in Keel is a caller error. None of them are
//! recoverable at the point of detection: the fatal accessors report
//! through [`fatal`](crate::contract::fatal) and never return. The
//! same values are handed back by the `try_*` accessors for callers
//! that would rather branch than halt.

use std::error::Error;
use std::fmt;

/// A violated precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// An index outside `0..len` was used to address a fixed array.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements in the array.
        len: usize,
    },
    /// An empty handle was dereferenced.
    NullDereference,
}

impl ContractViolation {
    /// Short, stable name of the violated precondition.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds { .. } => "index_out_of_bounds",
            Self::NullDereference => "null_dereference",
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Invalid index: {index} (len {len})")
            }
            Self::NullDereference => write!(f, "Managed pointer is null"),
        }
    }
}

impl Error for ContractViolation {}
