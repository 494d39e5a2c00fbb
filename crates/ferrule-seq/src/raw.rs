//! Unchecked element access.
//!
//! The only module in this crate permitted `unsafe`. These accessors
//! perform no bounds validation at all: an out-of-range position is
//! undefined behavior by explicit contract, never a detected error. On the
//! zero-capacity shape no valid position exists, so every call is a
//! contract violation.

#![allow(unsafe_code)]

use crate::seq::FixedSeq;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `N`. Violating this is immediate undefined
    /// behavior.
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        // SAFETY: the caller guarantees pos < N.
        unsafe { self.items.get_unchecked(pos) }
    }

    /// Mutable element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `N`. Violating this is immediate undefined
    /// behavior.
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        // SAFETY: the caller guarantees pos < N.
        unsafe { self.items.get_unchecked_mut(pos) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_agrees_with_checked_on_valid_positions() {
        let mut seq = FixedSeq::from([5, 6, 7]);
        for pos in 0..seq.len() {
            // SAFETY: pos < N by the loop bound.
            assert_eq!(unsafe { seq.get_unchecked(pos) }, seq.at(pos));
        }
        // SAFETY: position 1 is in range for a length-3 sequence.
        unsafe { *seq.get_unchecked_mut(1) = 60 };
        assert_eq!(seq.as_slice(), [5, 60, 7]);
    }
}
