use std::sync::atomic::{AtomicU64, Ordering};

/// The baked-in default seed, used unless [`set_default_seed`] has been
/// called first.
const INITIAL_DEFAULT_SEED: u64 = 0x1234_5678_ABCD_EF00;

/// Process-wide default consulted by `SwissMap::new`/`with_capacity`.
///
/// This is only a *default-construction* hook: once a table is built it
/// captures the seed in effect at that moment and carries it for its own
/// lifetime (see `RawTable::seed`). Changing the default afterwards never
/// perturbs an already-built table.
static DEFAULT_SEED: AtomicU64 = AtomicU64::new(INITIAL_DEFAULT_SEED);

/// Sets the process-wide default seed used by tables constructed after this
/// call returns. Tables already constructed are unaffected.
pub fn set_default_seed(seed: u64) {
    DEFAULT_SEED.store(seed, Ordering::Relaxed);
}

/// Returns the seed that a newly constructed table would capture right now.
pub(crate) fn current_default_seed() -> u64 {
    DEFAULT_SEED.load(Ordering::Relaxed)
}

/// The bottom 57 bits of a mixed hash, used to pick a starting group.
pub(crate) const INDEX57_MASK: u64 = (1u64 << 57) - 1;

/// Splits a mixed hash into `(index57, tag7)`.
#[inline]
pub(crate) fn split(mixed: u64) -> (u64, u8) {
    let index57 = mixed & INDEX57_MASK;
    let tag7 = (mixed >> 57) as u8 & 0x7F;
    (index57, tag7)
}

/// A seeded SplitMix64-style finalizer: XOR-shift-multiply applied three
/// times to spread key bits across the full 64-bit output.
#[inline]
pub(crate) fn mix(key: u64, seed: u64) -> u64 {
    let mut x = key ^ seed;
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}
