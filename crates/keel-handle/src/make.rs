//! Construction helpers: the only allocation points in Keel.
//!
//! Allocation failure is handled the way `Box::new` handles it, by
//! aborting through the global allocation error handler.

use crate::handle::UniqueHandle;

/// Move `value` to the heap and own it.
///
/// ```
/// use keel_handle::make_unique;
///
/// let mut h = make_unique(42);
/// assert_eq!(*h, 42);
/// let raw = h.release().unwrap();
/// assert!(h.is_null());
/// // SAFETY: `raw` came from `make_unique` and was released.
/// drop(unsafe { Box::from_raw(raw.as_ptr()) });
/// ```
#[must_use]
pub fn make_unique<T>(value: T) -> UniqueHandle<T> {
    UniqueHandle::from_box(Box::new(value))
}

/// Construct a value with `init` and own it on the heap.
#[must_use]
pub fn make_unique_with<T, F>(init: F) -> UniqueHandle<T>
where
    F: FnOnce() -> T,
{
    make_unique(init())
}
