//! Conversions between [`FixedArray`] and built-in arrays and slices.

use core::borrow::{Borrow, BorrowMut};

use crate::array::FixedArray;

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(array: FixedArray<T, N>) -> Self {
        array.into_inner()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Build a [`FixedArray`] holding a copy of every element of `source`.
///
/// The length is taken from the source array type.
///
/// ```
/// use keel_array::to_array;
///
/// let names = ["bow", "stern"];
/// let fixed = to_array(&names);
/// assert_eq!(fixed.len(), 2);
/// assert_eq!(fixed[1], "stern");
/// ```
pub fn to_array<T: Clone, const N: usize>(source: &[T; N]) -> FixedArray<T, N> {
    FixedArray::new(source.clone())
}
