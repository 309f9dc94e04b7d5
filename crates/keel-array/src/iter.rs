//! Forward and reverse traversal.

use core::iter::Rev;
use core::slice;

use crate::array::FixedArray;

impl<T, const N: usize> FixedArray<T, N> {
    /// Iterate from index `0` to `N - 1`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably from index `0` to `N - 1`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate from index `N - 1` down to `0`.
    #[inline]
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Iterate mutably from index `N - 1` down to `0`.
    #[inline]
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_reverse_order() {
        let a = FixedArray::new([1, 2, 3]);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(a.iter_rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn mutable_traversal() {
        let mut a = FixedArray::new([1, 2, 3]);
        for v in &mut a {
            *v *= 2;
        }
        let mut seen = Vec::new();
        for v in a.iter_rev_mut() {
            seen.push(*v);
            *v += 1;
        }
        assert_eq!(seen, [6, 4, 2]);
        assert_eq!(a.into_inner(), [3, 5, 7]);
    }

    #[test]
    fn owned_iteration_moves_elements() {
        let a = FixedArray::new([String::from("a"), String::from("b")]);
        let joined: String = a.into_iter().collect();
        assert_eq!(joined, "ab");
    }

    #[test]
    fn iterator_lengths_are_exact() {
        let a = FixedArray::new([0u8; 5]);
        assert_eq!(a.iter().len(), 5);
        assert_eq!((&a).into_iter().rev().len(), 5);
    }
}
