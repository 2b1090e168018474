//! Internal bit manipulation helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

/// Returns a mask covering the low `bits` bits (`bits` in `1..=64`).
#[inline]
pub(crate) const fn low_mask(bits: u32) -> u64 {
    u64::MAX >> (64 - bits)
}

/// Reverses the order of the low `bits` bits of `value`.
///
/// Bits above `bits` are discarded.
#[inline]
pub(crate) const fn reflect_bits(value: u64, bits: u32) -> u64 {
    value.reverse_bits() >> (64 - bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(1), 0x1);
        assert_eq!(low_mask(12), 0xFFF);
        assert_eq!(low_mask(64), u64::MAX);
    }

    #[test]
    fn test_reflect_bits() {
        assert_eq!(reflect_bits(0b0001, 4), 0b1000);
        assert_eq!(reflect_bits(0x01, 8), 0x80);
        assert_eq!(reflect_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
        assert_eq!(reflect_bits(1, 64), 1 << 63);
        assert_eq!(reflect_bits(1, 1), 1);
    }

    #[test]
    fn test_reflect_ignores_high_bits() {
        assert_eq!(reflect_bits(0xF0 | 0b011, 3), 0b110);
    }
}
