//! Benchmark fixtures for the Ferrule primitives.
//!
//! Provides deterministic builders shared by the bench targets:
//!
//! - [`patterned_seq`]: a `FixedSeq` filled from a cheap index hash
//! - [`boxed_handles`]: a batch of `BoxHandle`s over freshly boxed payloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferrule_cell::BoxHandle;
use ferrule_seq::FixedSeq;

/// Build a `FixedSeq` whose elements derive deterministically from their
/// index and `seed`, so comparison benchmarks see realistic mixed data
/// rather than a constant fill.
pub fn patterned_seq<const N: usize>(seed: u64) -> FixedSeq<u64, N> {
    FixedSeq::from_fn(|i| {
        seed.wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
    })
}

/// Build `count` cells, each owning a freshly boxed payload.
pub fn boxed_handles(count: usize) -> Vec<BoxHandle<u64>> {
    (0..count)
        .map(|i| BoxHandle::new(Box::into_raw(Box::new(i as u64))))
        .collect()
}
