//! Disposal policies: the strategy a cell invokes to release its handle.
//!
//! A policy is a value implementing [`Dispose`] for the cell's handle type.
//! Two heap-releasing policies are provided, one per allocation shape:
//! [`BoxPolicy`] for a single heap unit and [`SlicePolicy`] for a
//! contiguous run. The shapes accept distinct handle types (`*mut T` vs
//! `*mut [T]`), so a run can never be released through the singular path.

#![allow(unsafe_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Strategy invoked to release an owned handle.
///
/// Called at most once per handle by the owning cell: during
/// [`reset`](crate::HandleCell::reset), when a transfer displaces the
/// destination's current resource, or on drop. Policies take the handle by
/// value; whatever the policy does with it is the final word on that
/// resource.
pub trait Dispose<H> {
    /// Release `handle`. After this returns the resource is gone.
    fn dispose(&mut self, handle: H);
}

/// Disposal policy for a single heap-allocated unit.
///
/// Releases a `*mut T` produced by [`Box::into_raw`]. This is the default
/// policy of [`HandleCell`](crate::HandleCell) and the policy behind the
/// [`BoxHandle`](crate::BoxHandle) alias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxPolicy;

impl<T> Dispose<*mut T> for BoxPolicy {
    fn dispose(&mut self, handle: *mut T) {
        // SAFETY: the cell contract requires `handle` to have come from
        // `Box::into_raw(Box<T>)` and to still be live; the cell invokes
        // the policy at most once per handle, so the box is reconstructed
        // and freed exactly once.
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Disposal policy for a contiguous heap-allocated run.
///
/// Releases a `*mut [T]` produced by [`Box::into_raw`] on a boxed slice.
/// The fat-pointer handle type keeps run deallocation separate from the
/// singular [`BoxPolicy`] path at the type level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlicePolicy;

impl<T> Dispose<*mut [T]> for SlicePolicy {
    fn dispose(&mut self, handle: *mut [T]) {
        // SAFETY: the cell contract requires `handle` to have come from
        // `Box::into_raw(Box<[T]>)` and to still be live; disposal runs at
        // most once, so the boxed slice is reconstructed and freed exactly
        // once, dropping every element.
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Adapter turning any `FnMut(H)` closure into a disposal policy.
///
/// ```rust
/// use ferrule_cell::{FnPolicy, HandleCell};
///
/// // A cell over a plain token, released by logging it away.
/// let mut released = Vec::new();
/// {
///     let cell = HandleCell::with_policy(Some(7u32), FnPolicy(|h| released.push(h)));
///     drop(cell);
/// }
/// assert_eq!(released, [7]);
/// ```
pub struct FnPolicy<F>(pub F);

impl<H, F: FnMut(H)> Dispose<H> for FnPolicy<F> {
    fn dispose(&mut self, handle: H) {
        (self.0)(handle);
    }
}

/// Instrumented policy that counts how many times it disposes.
///
/// The count lives behind an `Rc`, so clones observe the same tally: keep
/// one clone outside the cell and read [`disposals`](Self::disposals) after
/// exercising it. Used throughout the test suites to verify exactly-once
/// release; deliberately not `Send` or `Sync` — this crate is
/// single-threaded by contract.
#[derive(Clone, Debug, Default)]
pub struct CountingPolicy {
    count: Rc<Cell<u32>>,
}

impl CountingPolicy {
    /// New policy with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many handles this policy (and its clones) have disposed.
    pub fn disposals(&self) -> u32 {
        self.count.get()
    }
}

impl<H> Dispose<H> for CountingPolicy {
    fn dispose(&mut self, handle: H) {
        drop(handle);
        self.count.set(self.count.get() + 1);
    }
}
