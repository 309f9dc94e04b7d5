//! Disposal policies.
//!
//! A [`Deleter`] decides how an owned pointer is released. The handle
//! calls it exactly once per owned object, and also calls it with
//! `None` when an empty handle is reset or dropped, which every policy
//! must treat as a no-op.

#![allow(unsafe_code)]

use core::ptr::NonNull;

/// Disposal policy for a [`UniqueHandle`](crate::UniqueHandle).
///
/// Implemented by [`DefaultDeleter`] and by every
/// `FnMut(Option<NonNull<T>>)` closure.
pub trait Deleter<T: ?Sized> {
    /// Dispose of the object behind `ptr`. `None` must be a no-op.
    ///
    /// # Safety
    ///
    /// When `ptr` is `Some`, the caller must own the object exclusively,
    /// it must have been obtained the way this policy expects (for
    /// [`DefaultDeleter`], from a `Box`), and it must not be used again.
    unsafe fn dispose(&mut self, ptr: Option<NonNull<T>>);
}

/// Drops a `Box`-allocated object and frees its storage.
///
/// Zero-sized, so a handle using it is exactly one pointer wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultDeleter;

impl<T: ?Sized> Deleter<T> for DefaultDeleter {
    unsafe fn dispose(&mut self, ptr: Option<NonNull<T>>) {
        if let Some(ptr) = ptr {
            // SAFETY: the caller guarantees `ptr` came from `Box::into_raw`
            // (or `Box::leak`) and is owned exclusively by us.
            drop(unsafe { Box::from_raw(ptr.as_ptr()) });
        }
    }
}

impl<T: ?Sized, F> Deleter<T> for F
where
    F: FnMut(Option<NonNull<T>>),
{
    unsafe fn dispose(&mut self, ptr: Option<NonNull<T>>) {
        self(ptr)
    }
}
