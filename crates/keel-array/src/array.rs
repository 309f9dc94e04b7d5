//! The fixed array type and its element access.

use core::fmt;
use core::ops::{Index, IndexMut};

use keel_core::contract::{check_index, expect_ok};
use keel_core::ContractViolation;

/// A sequence of exactly `N` elements of `T`, stored inline.
///
/// `N` is fixed at compile time and must be at least one; the size never
/// changes, so [`is_full`](Self::is_full) is always true and
/// [`is_empty`](Self::is_empty) always false. Cloning or copying clones
/// or copies each element; dropping drops each element in index order.
///
/// Indexed access through `[]`, [`at`](Self::at) and
/// [`at_mut`](Self::at_mut) treats an out-of-range index as a contract
/// violation and halts. [`get`](Self::get) and [`try_at`](Self::try_at)
/// are the non-fatal alternatives.
///
/// ```
/// use keel_array::FixedArray;
///
/// let a = FixedArray::new([1, 2, 3]);
/// let b = FixedArray::new([1, 2, 4]);
/// assert!(a < b);
/// assert!(a != b);
/// assert_eq!(a[2], 3);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Post-monomorphization check that rejects `N == 0`.
    const NON_EMPTY: () = assert!(N > 0, "FixedArray requires at least one element");

    /// Wrap an existing built-in array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Build each element from its index, in index order.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(core::array::from_fn(f))
    }

    /// Unwrap into the built-in array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Number of elements. Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Maximum number of elements. Always `N`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Remaining element capacity. Always zero.
    #[inline]
    pub const fn available(&self) -> usize {
        0
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Always `true`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        true
    }

    /// The elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Alias of [`as_slice`](Self::as_slice).
    #[inline]
    pub const fn data(&self) -> &[T] {
        &self.data
    }

    /// Alias of [`as_mut_slice`](Self::as_mut_slice).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// The element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The element at `index` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// The element at `index`, or the violation an out-of-range index
    /// represents.
    #[inline]
    pub fn try_at(&self, index: usize) -> Result<&T, ContractViolation> {
        check_index(index, N)?;
        Ok(&self.data[index])
    }

    /// Mutable form of [`try_at`](Self::try_at).
    #[inline]
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, ContractViolation> {
        check_index(index, N)?;
        Ok(&mut self.data[index])
    }

    /// The element at `index`. Fatal if `index >= N`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        expect_ok(self.try_at(index))
    }

    /// The element at `index`, mutably. Fatal if `index >= N`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        expect_ok(self.try_at_mut(index))
    }

    /// The first element.
    #[inline]
    pub fn front(&self) -> &T {
        &self.data[0]
    }

    /// The first element, mutably.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    /// The last element.
    #[inline]
    pub fn back(&self) -> &T {
        &self.data[N - 1]
    }

    /// The last element, mutably.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.data[N - 1]
    }

    /// Assign `value` to every element, in index order.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Exchange every element with the one at the same index in `other`.
    ///
    /// Elements are swapped one pair at a time, in index order.
    pub fn swap(&mut self, other: &mut Self) {
        for (a, b) in self.data.iter_mut().zip(other.data.iter_mut()) {
            core::mem::swap(a, b);
        }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Exchange the contents of two arrays, element by element.
pub fn swap<T, const N: usize>(a: &mut FixedArray<T, N>, b: &mut FixedArray<T, N>) {
    a.swap(b);
}
