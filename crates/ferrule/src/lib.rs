//! Ferrule: single-ownership and fixed-capacity primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Ferrule sub-crates. For most users, adding `ferrule` as a single
//! dependency is sufficient.
//!
//! Two independent components, usable separately or together:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`cell`] | `ferrule-cell` | [`HandleCell`], disposal policies, exactly-once release |
//! | [`seq`] | `ferrule-seq` | [`FixedSeq`], checked/unchecked access, structural comparison |
//!
//! # Quick start
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! // A fixed sequence of owning cells: each slot releases its resource
//! // exactly once when the sequence is dropped.
//! let mut slots: FixedSeq<BoxHandle<u32>, 3> =
//!     FixedSeq::from_fn(|i| BoxHandle::new(Box::into_raw(Box::new(i as u32))));
//!
//! assert!(slots.at(0).owns());
//!
//! // Hand slot 1's resource back to the caller.
//! let raw = slots.at_mut(1).release().unwrap();
//! assert!(!slots.at(1).owns());
//! // SAFETY: `release` transferred ownership of the box to us.
//! let value = unsafe { Box::from_raw(raw) };
//! assert_eq!(*value, 1);
//! ```
//!
//! [`HandleCell`]: cell::HandleCell
//! [`FixedSeq`]: seq::FixedSeq

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Single-ownership handle cells and disposal policies (`ferrule-cell`).
pub use ferrule_cell as cell;

/// Fixed-capacity sequences (`ferrule-seq`).
pub use ferrule_seq as seq;

pub mod prelude {
    //! Commonly used types, importable in one line.

    pub use ferrule_cell::{BoxHandle, BoxPolicy, Dispose, HandleCell, SliceHandle, SlicePolicy};
    pub use ferrule_seq::FixedSeq;
}
