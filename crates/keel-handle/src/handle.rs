//! The single-owner handle.
//!
//! A [`UniqueHandle`] is either *empty* or *owning*. Moves are Rust
//! moves, so two live handles can only share a pointer if a caller
//! adopted the same raw pointer twice through [`UniqueHandle::from_raw`]
//! or [`UniqueHandle::reset_with`], which is a violation of their
//! safety contract, not something the handle can detect.
//!
//! ```text
//!            from_raw / from_box / reset_with / assign
//!   Empty ───────────────────────────────────────────▶ Owning
//!     ▲                                                 │  │
//!     └──── release / reset / into_parts / drop ────────┘  │
//!                                                       ◀──┘
//!              reset_with(other) / assign(other): old disposed
//! ```

#![allow(unsafe_code)]

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use keel_core::contract::fatal;
use keel_core::ContractViolation;

use crate::deleter::{DefaultDeleter, Deleter};
use crate::upcast::Upcast;

/// Address of a possibly-null, possibly-fat pointer. Metadata is ignored
/// so `dyn` views of one object compare equal to the concrete view.
#[inline]
pub(crate) fn addr<T: ?Sized>(ptr: Option<NonNull<T>>) -> usize {
    ptr.map_or(0, |p| p.as_ptr().addr())
}

/// Exclusive owner of at most one object, disposed through `D`.
///
/// With the zero-sized [`DefaultDeleter`] the handle is exactly one
/// pointer wide, and `Option`'s niche keeps it that way for `Sized`
/// targets.
///
/// [`reset_with`](Self::reset_with) and [`assign`](Self::assign) never
/// treat a zero-sized pointee as the object already owned, so replacing
/// one zero-sized object with another always disposes the old one.
/// Comparison and hashing are by address only; see [`crate::cmp`].
///
/// The handle is `Send` and `Sync` exactly when `Box<T>` would be and
/// the deleter is too:
///
/// ```compile_fail
/// use std::rc::Rc;
/// use keel_handle::UniqueHandle;
///
/// fn assert_send<T: Send>() {}
/// assert_send::<UniqueHandle<Rc<u8>>>();
/// ```
pub struct UniqueHandle<T: ?Sized, D: Deleter<T> = DefaultDeleter> {
    ptr: Option<NonNull<T>>,
    deleter: D,
    _owns: PhantomData<T>,
}

// SAFETY: the handle owns its pointee like `Box<T>` does; sending or
// sharing it is sound exactly when sending or sharing `T` and `D` is.
unsafe impl<T: ?Sized + Send, D: Deleter<T> + Send> Send for UniqueHandle<T, D> {}
// SAFETY: as above.
unsafe impl<T: ?Sized + Sync, D: Deleter<T> + Sync> Sync for UniqueHandle<T, D> {}

impl<T: ?Sized, D: Deleter<T> + Default> UniqueHandle<T, D> {
    /// An empty handle.
    pub fn null() -> Self {
        Self::null_with_deleter(D::default())
    }

    /// Take ownership of `ptr` with a default-constructed deleter.
    ///
    /// A null `ptr` yields an empty handle.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for the deleter `D` to dispose, and no other
    /// owner may dispose or adopt it afterwards.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_with_deleter(ptr, D::default()) }
    }
}

impl<T: ?Sized, D: Deleter<T>> UniqueHandle<T, D> {
    /// An empty handle carrying `deleter`.
    pub const fn null_with_deleter(deleter: D) -> Self {
        Self {
            ptr: None,
            deleter,
            _owns: PhantomData,
        }
    }

    /// Take ownership of `ptr`, to be disposed through `deleter`.
    ///
    /// # Safety
    ///
    /// Same as [`from_raw`](Self::from_raw).
    pub unsafe fn from_raw_with_deleter(ptr: *mut T, deleter: D) -> Self {
        Self {
            ptr: NonNull::new(ptr),
            deleter,
            _owns: PhantomData,
        }
    }

    /// Whether the handle is empty.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Whether the handle owns an object.
    #[inline]
    pub fn is_owning(&self) -> bool {
        self.ptr.is_some()
    }

    /// The owned object, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: an owned pointer stays valid until we dispose it, and
        // the returned borrow keeps `self` alive and unmodified.
        self.ptr.map(|p| unsafe { p.as_ref() })
    }

    /// The owned object, mutably, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `get`, and `&mut self` guarantees exclusivity.
        self.ptr.map(|mut p| unsafe { p.as_mut() })
    }

    /// The owned pointer without giving up ownership.
    #[inline]
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// The disposal policy.
    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    /// The disposal policy, mutably.
    pub fn deleter_mut(&mut self) -> &mut D {
        &mut self.deleter
    }

    /// Give up ownership without disposing.
    ///
    /// The handle becomes empty and the caller becomes responsible for
    /// the returned object.
    #[must_use = "the released object leaks unless it is disposed"]
    pub fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Dispose of the owned object, leaving the handle empty.
    ///
    /// The deleter is called even when the handle is already empty; it
    /// receives `None` in that case.
    pub fn reset(&mut self) {
        let old = self.ptr.take();
        // SAFETY: `old` was owned by this handle and is no longer
        // reachable through it.
        unsafe { self.deleter.dispose(old) };
    }

    /// Dispose of the owned object and adopt `ptr` instead.
    ///
    /// Does nothing when `ptr` is the object already owned, so a handle
    /// can never dispose of the object it is being reset to.
    ///
    /// # Safety
    ///
    /// Same as [`from_raw`](Self::from_raw), for this handle's deleter.
    pub unsafe fn reset_with(&mut self, ptr: *mut T) {
        // SAFETY: forwarded to the caller.
        unsafe { self.adopt(NonNull::new(ptr)) }
    }

    /// Identity-checked replacement of the owned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be disposable by `self.deleter` and owned by nobody else.
    unsafe fn adopt(&mut self, ptr: Option<NonNull<T>>) {
        if !self.is_same_object(ptr) {
            self.reset();
            self.ptr = ptr;
        }
    }

    /// Whether `ptr` designates the object this handle already owns.
    ///
    /// Two live objects of non-zero size never share an address, so the
    /// address alone decides for them. Zero-sized objects all share one
    /// dangling address and are never considered the same object.
    /// Metadata is not compared: vtable pointers for one type are not
    /// guaranteed to be unique.
    fn is_same_object(&self, ptr: Option<NonNull<T>>) -> bool {
        match (self.ptr, ptr) {
            (None, None) => true,
            (Some(current), Some(incoming)) => {
                // SAFETY: `current` is owned by this handle and still live.
                let size = mem::size_of_val(unsafe { current.as_ref() });
                size != 0 && addr(Some(current)) == addr(Some(incoming))
            }
            _ => false,
        }
    }

    /// Move-assign from `other`, which may own a more specific type.
    ///
    /// The currently owned object is disposed with the current deleter
    /// (unless `other` owns the very same object), then the pointer and
    /// `other`'s deleter are taken over.
    pub fn assign<U, E>(&mut self, other: UniqueHandle<U, E>)
    where
        U: ?Sized + Upcast<T>,
        E: Deleter<U> + Into<D>,
    {
        let (ptr, deleter) = other.into_parts();
        // SAFETY: `other` owned `ptr` and gave it up in `into_parts`;
        // `Upcast` keeps it pointing at the same allocation.
        unsafe { self.adopt(ptr.map(U::upcast)) };
        self.deleter = deleter.into();
    }

    /// Convert into a handle over a less specific type, transferring
    /// ownership. An empty handle converts to an empty handle.
    pub fn into_base<U, E>(self) -> UniqueHandle<U, E>
    where
        T: Upcast<U>,
        U: ?Sized,
        D: Into<E>,
        E: Deleter<U>,
    {
        let (ptr, deleter) = self.into_parts();
        UniqueHandle {
            ptr: ptr.map(T::upcast),
            deleter: deleter.into(),
            _owns: PhantomData,
        }
    }

    /// Split into the owned pointer and the deleter without disposing.
    #[must_use = "the released object leaks unless it is disposed"]
    pub fn into_parts(self) -> (Option<NonNull<T>>, D) {
        let mut this = ManuallyDrop::new(self);
        let ptr = this.ptr.take();
        // SAFETY: `this` is never dropped or touched again, so the
        // deleter is moved out exactly once.
        let deleter = unsafe { ptr::read(&this.deleter) };
        (ptr, deleter)
    }

    /// Exchange owned objects and deleters. Nothing is disposed.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.deleter, &mut other.deleter);
    }
}

impl<T: ?Sized> UniqueHandle<T> {
    /// Take ownership of a boxed object.
    pub fn from_box(boxed: Box<T>) -> Self {
        Self {
            ptr: Some(NonNull::from(Box::leak(boxed))),
            deleter: DefaultDeleter,
            _owns: PhantomData,
        }
    }

    /// Hand the owned object back as a `Box`, or `None` if empty.
    pub fn into_box(self) -> Option<Box<T>> {
        let (ptr, _) = self.into_parts();
        // SAFETY: default-deleter handles only ever own `Box` pointers.
        ptr.map(|p| unsafe { Box::from_raw(p.as_ptr()) })
    }
}

impl<T: ?Sized> From<Box<T>> for UniqueHandle<T> {
    fn from(boxed: Box<T>) -> Self {
        Self::from_box(boxed)
    }
}

impl<T: ?Sized, D: Deleter<T> + Default> Default for UniqueHandle<T, D> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized, D: Deleter<T>> Drop for UniqueHandle<T, D> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: ?Sized, D: Deleter<T>> Deref for UniqueHandle<T, D> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => fatal(ContractViolation::NullDereference),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> DerefMut for UniqueHandle<T, D> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => fatal(ContractViolation::NullDereference),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> fmt::Debug for UniqueHandle<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr {
            Some(p) => write!(f, "UniqueHandle({p:p})"),
            None => f.write_str("UniqueHandle(null)"),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> fmt::Pointer for UniqueHandle<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self
            .ptr
            .map_or(ptr::null::<()>(), |p| p.cast::<()>().as_ptr().cast_const());
        fmt::Pointer::fmt(&raw, f)
    }
}

/// Exchange the contents of two handles. Nothing is disposed.
pub fn swap<T: ?Sized, D: Deleter<T>>(a: &mut UniqueHandle<T, D>, b: &mut UniqueHandle<T, D>) {
    a.swap(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A boxed `i32` handle whose deleter counts non-null disposals.
    fn counted(
        value: i32,
        count: &Rc<Cell<usize>>,
    ) -> UniqueHandle<i32, impl FnMut(Option<NonNull<i32>>)> {
        let count = count.clone();
        let deleter = move |ptr: Option<NonNull<i32>>| {
            if let Some(p) = ptr {
                count.set(count.get() + 1);
                // SAFETY: every pointer handed to this deleter is a Box pointer.
                drop(unsafe { Box::from_raw(p.as_ptr()) });
            }
        };
        // SAFETY: fresh Box pointer, owned by nobody else.
        unsafe { UniqueHandle::from_raw_with_deleter(Box::into_raw(Box::new(value)), deleter) }
    }

    #[test]
    fn default_handle_is_pointer_sized() {
        assert_eq!(
            mem::size_of::<UniqueHandle<u64>>(),
            mem::size_of::<*const u64>()
        );
    }

    #[test]
    fn null_handle_state() {
        let h: UniqueHandle<i32> = UniqueHandle::null();
        assert!(h.is_null());
        assert!(!h.is_owning());
        assert!(h.get().is_none());
        assert_eq!(format!("{h:?}"), "UniqueHandle(null)");
    }

    #[test]
    fn drop_disposes_once() {
        let count = Rc::new(Cell::new(0));
        {
            let h = counted(1, &count);
            assert_eq!(*h, 1);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reset_empties_and_disposes() {
        let count = Rc::new(Cell::new(0));
        let mut h = counted(1, &count);
        h.reset();
        assert!(h.is_null());
        assert_eq!(count.get(), 1);
        h.reset();
        drop(h);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reset_with_same_pointer_is_noop() {
        let count = Rc::new(Cell::new(0));
        let mut h = counted(5, &count);
        let same = h.as_ptr().map_or(ptr::null_mut(), NonNull::as_ptr);
        // SAFETY: identity reset never adopts a second owner.
        unsafe { h.reset_with(same) };
        assert_eq!(count.get(), 0);
        assert_eq!(*h, 5);
    }

    #[test]
    fn reset_with_new_pointer_disposes_old() {
        let count = Rc::new(Cell::new(0));
        let mut h = counted(5, &count);
        // SAFETY: fresh Box pointer.
        unsafe { h.reset_with(Box::into_raw(Box::new(6))) };
        assert_eq!(count.get(), 1);
        assert_eq!(*h, 6);
        drop(h);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn release_skips_disposal() {
        let count = Rc::new(Cell::new(0));
        let mut h = counted(9, &count);
        let raw = h.release().map_or(ptr::null_mut(), NonNull::as_ptr);
        assert!(h.is_null());
        drop(h);
        assert_eq!(count.get(), 0);
        // SAFETY: released Box pointer, now ours.
        assert_eq!(*unsafe { Box::from_raw(raw) }, 9);
    }

    #[test]
    fn assign_disposes_previous() {
        let count = Rc::new(Cell::new(0));
        let mut a = counted(1, &count);
        let b = counted(2, &count);
        a.assign(b);
        assert_eq!(count.get(), 1);
        assert_eq!(*a, 2);
    }

    #[test]
    fn swap_exchanges_without_disposal() {
        let mut a = UniqueHandle::from_box(Box::new(1));
        let mut b = UniqueHandle::from_box(Box::new(2));
        swap(&mut a, &mut b);
        assert_eq!((*a, *b), (2, 1));
    }

    #[test]
    fn box_round_trip() {
        let h = UniqueHandle::from(Box::new(String::from("keel")));
        let boxed = h.into_box();
        assert_eq!(boxed.as_deref().map(String::as_str), Some("keel"));
        assert!(UniqueHandle::<u8>::null().into_box().is_none());
    }

    #[test]
    fn send_and_sync_follow_box() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<UniqueHandle<String>>();
        assert_sync::<UniqueHandle<String>>();
        assert_send::<UniqueHandle<dyn Fn() + Send>>();
        assert_send::<UniqueHandle<u8, fn(Option<NonNull<u8>>)>>();
    }

    #[test]
    fn replacing_zero_sized_object_disposes_it() {
        let count = Rc::new(Cell::new(0));
        let deleter = {
            let count = count.clone();
            move |ptr: Option<NonNull<()>>| {
                if let Some(p) = ptr {
                    count.set(count.get() + 1);
                    // SAFETY: every pointer handed to this deleter is a Box pointer.
                    drop(unsafe { Box::from_raw(p.as_ptr()) });
                }
            }
        };
        // SAFETY: fresh Box pointer, owned by nobody else.
        let mut h =
            unsafe { UniqueHandle::from_raw_with_deleter(Box::into_raw(Box::new(())), deleter) };
        // SAFETY: a second, distinct zero-sized allocation.
        unsafe { h.reset_with(Box::into_raw(Box::new(()))) };
        assert_eq!(count.get(), 1);
        drop(h);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn into_parts_keeps_deleter() {
        let count = Rc::new(Cell::new(0));
        let h = counted(3, &count);
        let (ptr, mut deleter) = h.into_parts();
        assert_eq!(count.get(), 0);
        // SAFETY: `ptr` was released by the handle and is a Box pointer.
        unsafe { deleter.dispose(ptr) };
        assert_eq!(count.get(), 1);
    }

    #[test]
    #[should_panic(expected = "Managed pointer is null")]
    fn deref_null_is_fatal() {
        let h: UniqueHandle<i32> = UniqueHandle::null();
        let _value: i32 = *h;
    }

    #[test]
    #[should_panic(expected = "Managed pointer is null")]
    fn deref_mut_null_is_fatal() {
        let mut h: UniqueHandle<i32> = UniqueHandle::default();
        *h = 3;
    }
}
