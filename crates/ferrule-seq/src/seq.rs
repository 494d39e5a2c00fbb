//! The fixed-capacity sequence type.
//!
//! [`FixedSeq`] is a newtype over `[T; N]` with the container contract
//! spelled out: checked access panics with a diagnostic, statically
//! positioned access is verified at compile time, and comparison is
//! structural (element-wise equality, lexicographic ordering) — both
//! delegated to the inner array, which compares in index order and
//! short-circuits at the first difference.

use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

/// A sequence of exactly `N` elements, fixed for its whole lifetime.
///
/// Value-semantic: `Clone`/`Copy` (when `T` allows) duplicate the whole
/// content, equality and ordering compare it element-wise. Two sequences of
/// different capacities are different types, so shape mismatches never reach
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedSeq<T, const N: usize> {
    pub(crate) items: [T; N],
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Build a sequence by calling `f` with each index in order.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            items: std::array::from_fn(f),
        }
    }

    /// A sequence of default-constructed elements.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// A sequence holding `N` clones of `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Checked element access.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= N`. An out-of-range position is a programmer
    /// error, not a recoverable condition; use [`get`](Self::get) for the
    /// non-fatal variant.
    pub fn at(&self, pos: usize) -> &T {
        assert!(
            pos < N,
            "index {} out of range for FixedSeq of length {}",
            pos,
            N
        );
        &self.items[pos]
    }

    /// Checked mutable element access.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= N`.
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        assert!(
            pos < N,
            "index {} out of range for FixedSeq of length {}",
            pos,
            N
        );
        &mut self.items[pos]
    }

    /// Non-fatal element access: `None` when `pos >= N`.
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.items.get(pos)
    }

    /// Non-fatal mutable element access: `None` when `pos >= N`.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.items.get_mut(pos)
    }

    /// The first element. Rejected at compile time when `N = 0`.
    pub fn front(&self) -> &T {
        const { assert!(N > 0, "front() on a zero-capacity FixedSeq") };
        &self.items[0]
    }

    /// The first element, mutably. Rejected at compile time when `N = 0`.
    pub fn front_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "front_mut() on a zero-capacity FixedSeq") };
        &mut self.items[0]
    }

    /// The last element. Rejected at compile time when `N = 0`.
    pub fn back(&self) -> &T {
        const { assert!(N > 0, "back() on a zero-capacity FixedSeq") };
        &self.items[N - 1]
    }

    /// The last element, mutably. Rejected at compile time when `N = 0`.
    pub fn back_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "back_mut() on a zero-capacity FixedSeq") };
        &mut self.items[N - 1]
    }

    /// The element at compile-time position `I`.
    ///
    /// `I >= N` fails the build, never the process.
    pub fn nth<const I: usize>(&self) -> &T {
        const { assert!(I < N, "position out of range for FixedSeq") };
        &self.items[I]
    }

    /// The element at compile-time position `I`, mutably.
    ///
    /// `I >= N` fails the build, never the process.
    pub fn nth_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "position out of range for FixedSeq") };
        &mut self.items[I]
    }

    /// Consume the sequence and extract the element at position `I`.
    ///
    /// The remaining elements are dropped. `I >= N` fails the build.
    pub fn into_nth<const I: usize>(self) -> T {
        const { assert!(I < N, "position out of range for FixedSeq") };
        let mut iter = self.items.into_iter();
        match iter.nth(I) {
            Some(item) => item,
            // The const assertion above proves I < N.
            None => unreachable!(),
        }
    }

    /// The number of elements, always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// The maximum number of elements, always `N`: the sequence is already
    /// at capacity for its whole lifetime.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Whether the sequence holds no elements, i.e. `N = 0`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The elements as a contiguous slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The elements as a contiguous mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Raw pointer to the first element (dangling but aligned when `N = 0`).
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Raw mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Assign `value` to every element, in index order. No-op when `N = 0`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.items.fill(value);
    }

    /// Exchange contents with another sequence of the same shape.
    ///
    /// No-op when `N = 0`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.items, &mut other.items);
    }

    /// Forward traversal over the elements in index order.
    ///
    /// The iterator is double-ended; `.rev()` gives the reverse view.
    /// Re-deriving the iterator restarts from the beginning.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Forward traversal with mutable access.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Unwrap into the inner array.
    pub fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T: Default, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSeq<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> Index<usize> for FixedSeq<T, N> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        self.at(pos)
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSeq<T, N> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        self.at_mut(pos)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedSeq<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedSeq<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> IntoIterator for FixedSeq<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSeq<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSeq<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
