//! Element-wise equality, lexicographic ordering and hashing.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::array::FixedArray;

impl<T, U, const N: usize> PartialEq<FixedArray<U, N>> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedArray<U, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize> Ord for FixedArray<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// Hashes exactly as the borrowed `[T]` does, so maps keyed by
/// `FixedArray` can be queried with a slice.
impl<T: Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
