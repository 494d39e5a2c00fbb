//! The single-ownership cell.
//!
//! [`HandleCell`] pairs at most one opaque handle with the policy that will
//! release it. "No resource owned" is a valid state (`handle` is an
//! `Option`), and every mutation that displaces an owned handle disposes it
//! inline before rebinding — disposal is never deferred.

#![allow(unsafe_code)]

use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::policy::{BoxPolicy, Dispose, SlicePolicy};

/// A cell owning at most one resource handle, released exactly once.
///
/// `H` is the opaque handle type; `D` is the disposal policy invoked on the
/// handle when the cell gives it up for good. Ownership is non-duplicable:
/// the type implements neither `Clone` nor `Copy`, so a handle moves between
/// cells and is never copied.
///
/// The single-owner invariant is a caller precondition, not a runtime check:
/// constructing two cells from the same raw handle is undetected misuse.
///
/// ```compile_fail
/// use ferrule_cell::{CountingPolicy, HandleCell};
///
/// let cell: HandleCell<u32, CountingPolicy> = HandleCell::new(7);
/// let duplicate = cell.clone(); // no `Clone` impl: ownership cannot be duplicated
/// ```
pub struct HandleCell<H, D: Dispose<H> = BoxPolicy> {
    handle: Option<H>,
    policy: D,
}

/// A cell owning a single heap unit, released via [`BoxPolicy`].
pub type BoxHandle<T> = HandleCell<*mut T, BoxPolicy>;

/// A cell owning a contiguous heap run, released via [`SlicePolicy`].
pub type SliceHandle<T> = HandleCell<*mut [T], SlicePolicy>;

impl<H, D: Dispose<H>> HandleCell<H, D> {
    /// Adopt `handle` with a default-constructed policy.
    ///
    /// Accepts any handle value; no validation is performed.
    pub fn new(handle: H) -> Self
    where
        D: Default,
    {
        Self {
            handle: Some(handle),
            policy: D::default(),
        }
    }

    /// A cell owning nothing, with a default-constructed policy.
    pub fn empty() -> Self
    where
        D: Default,
    {
        Self {
            handle: None,
            policy: D::default(),
        }
    }

    /// Adopt `handle` (or nothing) with an explicit policy value.
    pub fn with_policy(handle: Option<H>, policy: D) -> Self {
        Self { handle, policy }
    }

    /// The current handle, without transferring ownership.
    pub fn get(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// The disposal policy.
    pub fn policy(&self) -> &D {
        &self.policy
    }

    /// Mutable access to the disposal policy.
    pub fn policy_mut(&mut self) -> &mut D {
        &mut self.policy
    }

    /// Whether a resource is currently owned.
    pub fn owns(&self) -> bool {
        self.handle.is_some()
    }

    /// Give the handle up without disposing it; the cell becomes empty.
    ///
    /// The caller takes over responsibility for eventual release. A second
    /// call (or a call on an empty cell) returns `None`.
    pub fn release(&mut self) -> Option<H> {
        self.handle.take()
    }

    /// Dispose the current handle (if any), then adopt `new`.
    ///
    /// Disposal happens before rebinding. Precondition: `new` must not be
    /// the handle the cell currently owns — passing it back in would hand
    /// the policy an already-released resource.
    pub fn reset(&mut self, new: Option<H>) {
        if let Some(old) = self.handle.take() {
            self.policy.dispose(old);
        }
        self.handle = new;
    }

    /// Exchange owned handles with `other`. Performs zero disposals; both
    /// cells remain valid owners of their (now swapped) resources. Policies
    /// stay put.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.handle, &mut other.handle);
    }

    /// Same-type transfer-assignment that keeps the source object alive.
    ///
    /// Disposes this cell's current handle with its own policy, then moves
    /// the source's handle and policy in. Afterwards `src` owns nothing and
    /// holds this cell's former policy — a valid, reusable state. Aliasing
    /// destination and source is ruled out by the two `&mut` borrows.
    pub fn take_from(&mut self, src: &mut Self) {
        if let Some(old) = self.handle.take() {
            self.policy.dispose(old);
        }
        self.handle = src.handle.take();
        mem::swap(&mut self.policy, &mut src.policy);
    }

    /// Cross-policy transfer-assignment.
    ///
    /// First disposes this cell's current resource (if any) with this
    /// cell's own policy, then adopts the source's handle and policy,
    /// converted into the destination types. The source is consumed, so its
    /// destructor cannot release the transferred handle a second time.
    pub fn adopt<H2, D2>(&mut self, src: HandleCell<H2, D2>)
    where
        H2: Into<H>,
        D2: Into<D> + Dispose<H2>,
    {
        if let Some(old) = self.handle.take() {
            self.policy.dispose(old);
        }
        let (handle, policy) = src.into_parts();
        self.handle = handle.map(Into::into);
        self.policy = policy.into();
    }

    /// Cross-policy transfer-construction.
    ///
    /// Moves the handle and policy into a cell of compatible handle and
    /// policy types, converting both. No disposal occurs.
    pub fn convert<H2, D2>(self) -> HandleCell<H2, D2>
    where
        H: Into<H2>,
        D: Into<D2>,
        D2: Dispose<H2>,
    {
        let (handle, policy) = self.into_parts();
        HandleCell {
            handle: handle.map(Into::into),
            policy: policy.into(),
        }
    }

    /// Destructure into the handle (if any) and the policy.
    ///
    /// The cell's destructor does not run, so the returned handle is live
    /// and the caller owns it.
    pub fn into_parts(self) -> (Option<H>, D) {
        let mut cell = ManuallyDrop::new(self);
        let handle = cell.handle.take();
        // SAFETY: `cell` is wrapped in ManuallyDrop, so `drop` never runs
        // on it and the policy is moved out exactly once.
        let policy = unsafe { ptr::read(&cell.policy) };
        (handle, policy)
    }
}

impl<H, D: Dispose<H>> Drop for HandleCell<H, D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.policy.dispose(handle);
        }
    }
}

impl<H, D: Dispose<H> + Default> Default for HandleCell<H, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H: fmt::Debug, D: Dispose<H>> fmt::Debug for HandleCell<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleCell")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
