//! SIMD-parallel scan of one 16-byte control group.
//!
//! Two backends implement the same contract: load 16 control bytes and
//! produce a 16-bit bitmask (bit *i* set means slot *i* matched), one bit
//! per slot regardless of backend. `sse2` compares all 16 bytes against a
//! target byte in one instruction pair; `generic` is a portable SWAR
//! fallback for targets without it (or when forced via the `no-simd`
//! feature), using the same "has-zero-byte" trick hashbrown's `swar.rs`
//! backend does.

use super::bitmask::BitMaskIter;

pub(crate) const GROUP_SIZE: usize = 16;

cfg_if::cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        not(feature = "no-simd"),
    ))] {
        mod sse2;
        use sse2 as backend;
    } else {
        mod generic;
        use generic as backend;
    }
}

/// One loaded, 16-byte run of control bytes.
///
/// Matching only ever compares bytes whose high bit is set (tags) against
/// a mask whose high bit is set, so Free (`0x00`) and Tombstone (`0x01`)
/// bytes can never spuriously satisfy a tag match.
#[derive(Clone, Copy)]
pub(crate) struct Group(backend::Bits);

impl Group {
    /// # Safety
    /// `ptr` must be valid for a 16-byte read, 16-byte aligned.
    #[inline]
    pub(crate) unsafe fn load(ptr: *const u8) -> Self {
        Group(backend::load(ptr))
    }

    /// Slots whose control byte equals `byte` exactly.
    #[inline]
    pub(crate) fn match_byte(self, byte: u8) -> BitMaskIter {
        BitMaskIter::new(backend::match_byte(self.0, byte))
    }

    /// Slots whose control byte has its high bit clear (Free or Tombstone).
    /// Used by the "find first Free-or-Tombstone slot" insertion probe.
    #[inline]
    pub(crate) fn match_empty_or_tombstone(self) -> BitMaskIter {
        BitMaskIter::new(backend::match_high_bit_clear(self.0))
    }
}
