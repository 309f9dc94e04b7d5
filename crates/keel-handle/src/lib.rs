//! Single-owner object handles with pluggable disposal for Keel.
//!
//! [`UniqueHandle<T, D>`] owns at most one object and disposes it
//! through its [`Deleter`] exactly once: on drop, on
//! [`reset`](UniqueHandle::reset), or when it is overwritten by
//! [`reset_with`](UniqueHandle::reset_with) or
//! [`assign`](UniqueHandle::assign). Ownership moves with the value, so
//! the type system keeps a pointer from having two live owners unless a
//! caller adopts the same raw pointer twice, which the `unsafe`
//! constructors forbid.
//!
//! # Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`make_unique`] | Allocate and own a value (the only allocation point). |
//! | `*h`, `h.field` | Access the object; fatal if the handle is empty. |
//! | [`release`](UniqueHandle::release) | Give up ownership without disposing. |
//! | [`reset`](UniqueHandle::reset) | Dispose and become empty. |
//! | [`reset_with`](UniqueHandle::reset_with) | Dispose and adopt a new pointer; no-op for the same pointer. |
//! | [`assign`](UniqueHandle::assign) | Move-assign from a same or more specific handle. |
//! | [`into_base`](UniqueHandle::into_base) | Generalized conversion to a less specific type. |
//! | `==`, `<`, `Hash` | By owned address, never by value; [`Null`] compares against emptiness. |
//!
//! This crate holds all of Keel's `unsafe` code, confined to the
//! `deleter`, `handle` and `upcast` modules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cmp;
pub mod deleter;
pub mod handle;
pub mod make;
pub mod upcast;

// Public re-exports for the primary API surface.
pub use cmp::Null;
pub use deleter::{DefaultDeleter, Deleter};
pub use handle::{swap, UniqueHandle};
pub use make::{make_unique, make_unique_with};
pub use upcast::Upcast;
