//! SSE2 group backend: a 16-byte load, a `_mm_cmpeq_epi8` compare, and a
//! `_mm_movemask_epi8` to collapse the result into one bit per lane. SSE2
//! is part of the x86_64 baseline and available on essentially every x86
//! target in practice, so this is reached unconditionally on those
//! architectures unless the `no-simd` feature forces the portable fallback
//! instead.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

pub(crate) type Bits = __m128i;

#[inline]
pub(crate) unsafe fn load(ptr: *const u8) -> Bits {
    _mm_load_si128(ptr as *const __m128i)
}

#[inline]
pub(crate) fn match_byte(group: Bits, byte: u8) -> u16 {
    unsafe {
        let cmp = _mm_cmpeq_epi8(group, _mm_set1_epi8(byte as i8));
        _mm_movemask_epi8(cmp) as u16
    }
}

#[inline]
pub(crate) fn match_high_bit_clear(group: Bits) -> u16 {
    unsafe {
        let high_bits = _mm_and_si128(group, _mm_set1_epi8(0x80u8 as i8));
        let cmp = _mm_cmpeq_epi8(high_bits, _mm_setzero_si128());
        _mm_movemask_epi8(cmp) as u16
    }
}
