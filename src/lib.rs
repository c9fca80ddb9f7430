//! A single-threaded, SIMD-accelerated hash map keyed by `u64`.
//!
//! [`SwissMap`] stores each slot's occupancy in a one-byte-per-slot control
//! array, scanned 16 bytes (one "group") at a time with SIMD compares, and
//! resolves collisions by linear probing across groups. Deletion leaves a
//! tombstone so probe sequences through a slot stay intact; growth always
//! doubles capacity and reclaims tombstones by rehashing into a fresh
//! image.
//!
//! This map is not thread-safe, does not shrink, does not guarantee
//! iteration order across a rehash (there is, in fact, no iteration API at
//! all), and only ever stores `u64` keys — there is no generic `Hash`
//! trait or pluggable hasher. These are deliberate scope limits, not gaps.

mod error;
mod map;
mod raw;
mod seed;

pub use error::{Result, SwissMapError};
pub use map::SwissMap;
pub use seed::set_default_seed;
