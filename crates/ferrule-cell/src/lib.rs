//! Single-ownership handle cells with pluggable disposal policies.
//!
//! A [`HandleCell`] owns at most one opaque resource handle and a policy
//! value describing how to release it. The cell guarantees the policy runs
//! on the handle exactly once, on whichever path gives the handle up last:
//! [`HandleCell::reset`], a transfer into another cell, or drop. Duplication
//! of ownership is a type error — `HandleCell` is neither `Clone` nor
//! `Copy`, so a handle can only ever be moved.
//!
//! This crate is the one in the Ferrule workspace that may contain `unsafe`
//! code: the heap-releasing policies reconstruct boxes from raw pointers,
//! and [`HandleCell::into_parts`] destructures a `Drop` type. Every block
//! carries a `SAFETY:` comment.
//!
//! # Quick start
//!
//! ```rust
//! use ferrule_cell::BoxHandle;
//!
//! let mut cell = BoxHandle::new(Box::into_raw(Box::new(42u32)));
//! assert!(cell.owns());
//!
//! // Hand the resource back to the caller; the cell is now empty and
//! // dropping it releases nothing.
//! let raw = cell.release().unwrap();
//! // SAFETY: `release` transferred ownership of the box to us.
//! let value = unsafe { Box::from_raw(raw) };
//! assert_eq!(*value, 42);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod cell;
pub mod policy;

pub use cell::{BoxHandle, HandleCell, SliceHandle};
pub use policy::{BoxPolicy, CountingPolicy, Dispose, FnPolicy, SlicePolicy};
