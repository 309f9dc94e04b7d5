//! Capability-bounded pointer conversion for generalized ownership
//! transfer.
//!
//! `UniqueHandle<Derived>` may become `UniqueHandle<dyn Base>` only when
//! `Derived: Upcast<dyn Base>`. Implementations are generated by the
//! [`upcast!`](crate::upcast!) macro, whose body is a plain return and
//! therefore compiles only when the compiler itself accepts the
//! unsizing (or trait-upcasting) coercion. Blind reinterpretation is
//! never possible through the macro.

#![allow(unsafe_code)]

use core::ptr::NonNull;

/// Pointer conversion from `Self` to a less specific `U`.
///
/// # Safety
///
/// `upcast` must return a pointer to the same allocation and the same
/// object, viewed as `U`. Disposing the returned pointer must be
/// equivalent to disposing the original one. Coercions performed by the
/// compiler satisfy this; prefer [`upcast!`](crate::upcast!) over a
/// hand-written impl.
pub unsafe trait Upcast<U: ?Sized> {
    /// Convert the pointer.
    fn upcast(ptr: NonNull<Self>) -> NonNull<U>;
}

// SAFETY: identity.
unsafe impl<T: ?Sized> Upcast<T> for T {
    #[inline]
    fn upcast(ptr: NonNull<T>) -> NonNull<T> {
        ptr
    }
}

/// Declare that a type may be owned through a less specific type.
///
/// ```
/// use keel_handle::{make_unique, upcast, UniqueHandle};
///
/// trait Shape {
///     fn area(&self) -> f32;
/// }
///
/// struct Square(f32);
/// impl Shape for Square {
///     fn area(&self) -> f32 {
///         self.0 * self.0
///     }
/// }
///
/// upcast!(Square => dyn Shape);
///
/// let square = make_unique(Square(3.0));
/// let shape: UniqueHandle<dyn Shape> = square.into_base();
/// assert_eq!(shape.area(), 9.0);
/// ```
#[macro_export]
macro_rules! upcast {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            // SAFETY: the body is an implicit coercion checked by the compiler.
            unsafe impl $crate::Upcast<$to> for $from {
                #[inline]
                fn upcast(ptr: ::core::ptr::NonNull<Self>) -> ::core::ptr::NonNull<$to> {
                    ptr
                }
            }
        )+
    };
}
