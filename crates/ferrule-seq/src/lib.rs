//! Fixed-capacity, value-semantic sequences.
//!
//! A [`FixedSeq<T, N>`] holds exactly `N` elements of `T`, contiguously and
//! in a fixed order, for its whole lifetime. It never grows or shrinks.
//! Access is bounds-checked by default ([`FixedSeq::at`] and the index
//! operator panic on an out-of-range position); the unchecked variants are
//! `unsafe fn`s whose misuse is undefined behavior by explicit contract.
//!
//! Statically positioned operations — [`FixedSeq::front`],
//! [`FixedSeq::back`], [`FixedSeq::nth`] — reject invalid positions at
//! compile time via `const` assertions, so calling `front` on a
//! zero-capacity sequence or `nth::<5>` on a `FixedSeq<_, 3>` fails the
//! build rather than the process.
//!
//! # Quick start
//!
//! ```rust
//! use ferrule_seq::FixedSeq;
//!
//! let mut seq = FixedSeq::from([3, 1, 2]);
//! seq.fill(9);
//! assert_eq!(seq.as_slice(), [9, 9, 9]);
//! assert_eq!(*seq.nth::<2>(), 9);
//!
//! let zero: FixedSeq<u8, 0> = FixedSeq::new();
//! assert!(zero.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod raw;
pub mod seq;

pub use seq::FixedSeq;
