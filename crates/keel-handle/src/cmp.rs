//! Identity comparison and hashing for handles.
//!
//! Handles compare and hash by the *address* they own, never by the
//! pointee's value. An empty handle behaves as address zero, so it
//! orders before every owning handle.
//!
//! Every boxed zero-sized value lives at the same dangling address, so
//! two handles owning distinct zero-sized objects compare equal and hash
//! alike. Do not key a map by handles to zero-sized types. Replacement
//! through `assign` and `reset_with` does not rely on this comparison
//! and always disposes a zero-sized object it replaces.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::deleter::Deleter;
use crate::handle::{addr, UniqueHandle};

/// The null-pointer literal, for comparing against handles.
///
/// `handle == Null` holds iff the handle is empty. Ordering treats
/// `Null` as the lowest address: `handle > Null` iff the handle owns an
/// object, and `handle >= Null` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl<T, D, U, E> PartialEq<UniqueHandle<U, E>> for UniqueHandle<T, D>
where
    T: ?Sized,
    D: Deleter<T>,
    U: ?Sized,
    E: Deleter<U>,
{
    fn eq(&self, other: &UniqueHandle<U, E>) -> bool {
        addr(self.as_ptr()) == addr(other.as_ptr())
    }
}

impl<T: ?Sized, D: Deleter<T>> Eq for UniqueHandle<T, D> {}

impl<T, D, U, E> PartialOrd<UniqueHandle<U, E>> for UniqueHandle<T, D>
where
    T: ?Sized,
    D: Deleter<T>,
    U: ?Sized,
    E: Deleter<U>,
{
    fn partial_cmp(&self, other: &UniqueHandle<U, E>) -> Option<Ordering> {
        Some(addr(self.as_ptr()).cmp(&addr(other.as_ptr())))
    }
}

impl<T: ?Sized, D: Deleter<T>> Ord for UniqueHandle<T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        addr(self.as_ptr()).cmp(&addr(other.as_ptr()))
    }
}

impl<T: ?Sized, D: Deleter<T>> Hash for UniqueHandle<T, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        addr(self.as_ptr()).hash(state);
    }
}

impl<T: ?Sized, D: Deleter<T>> PartialEq<Null> for UniqueHandle<T, D> {
    fn eq(&self, _: &Null) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized, D: Deleter<T>> PartialEq<UniqueHandle<T, D>> for Null {
    fn eq(&self, other: &UniqueHandle<T, D>) -> bool {
        other.is_null()
    }
}

impl<T: ?Sized, D: Deleter<T>> PartialOrd<Null> for UniqueHandle<T, D> {
    fn partial_cmp(&self, _: &Null) -> Option<Ordering> {
        Some(if self.is_null() {
            Ordering::Equal
        } else {
            Ordering::Greater
        })
    }
}

impl<T: ?Sized, D: Deleter<T>> PartialOrd<UniqueHandle<T, D>> for Null {
    fn partial_cmp(&self, other: &UniqueHandle<T, D>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::make_hash;

    fn boxed(v: i32) -> UniqueHandle<i32> {
        UniqueHandle::from_box(Box::new(v))
    }

    #[test]
    fn equality_is_identity_not_value() {
        let a = boxed(1);
        let b = boxed(1);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn empty_handles_are_equal() {
        let a: UniqueHandle<i32> = UniqueHandle::null();
        let b: UniqueHandle<i32> = UniqueHandle::null();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn empty_orders_first() {
        let empty: UniqueHandle<i32> = UniqueHandle::null();
        let owning = boxed(0);
        assert!(empty < owning);
        assert!(owning > empty);
    }

    #[test]
    fn ordering_follows_address() {
        let a = boxed(1);
        let b = boxed(2);
        let by_addr = addr(a.as_ptr()).cmp(&addr(b.as_ptr()));
        assert_eq!(a.cmp(&b), by_addr);
        assert_eq!(b.cmp(&a), by_addr.reverse());
    }

    #[test]
    fn null_comparisons_on_empty() {
        let h: UniqueHandle<i32> = UniqueHandle::null();
        assert!(h == Null);
        assert!(Null == h);
        assert!(!(h < Null));
        assert!(!(h > Null));
        assert!(h <= Null);
        assert!(h >= Null);
        assert!(Null <= h);
        assert!(Null >= h);
    }

    #[test]
    fn null_comparisons_on_owning() {
        let h = boxed(3);
        assert!(h != Null);
        assert!(Null != h);
        assert!(!(h < Null));
        assert!(h > Null);
        assert!(!(h <= Null));
        assert!(h >= Null);
        assert!(Null < h);
        assert!(!(Null > h));
        assert!(Null <= h);
        assert!(!(Null >= h));
    }

    #[test]
    fn hash_is_hash_of_address() {
        let h = boxed(4);
        assert_eq!(make_hash(&h), make_hash(&addr(h.as_ptr())));
        let empty: UniqueHandle<i32> = UniqueHandle::null();
        assert_eq!(make_hash(&empty), make_hash(&0usize));
    }

    #[test]
    fn zero_sized_objects_share_identity() {
        let a = UniqueHandle::from_box(Box::new(()));
        let b = UniqueHandle::from_box(Box::new(()));
        assert_eq!(a, b);
        assert_eq!(make_hash(&a), make_hash(&b));
    }

    #[test]
    fn hash_ignores_value() {
        let a = boxed(5);
        let b = boxed(5);
        assert_ne!(make_hash(&a), make_hash(&b));
    }
}
