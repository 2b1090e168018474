//! The HashValue type - the finalized output of a hash computation.

use std::fmt;

use bytes::Bytes;

/// An immutable hash result.
///
/// Holds `ceil(bit_length / 8)` bytes. Sizes that are not a whole number of
/// bytes (a 12-bit CRC, say) occupy the low-order bits of the last byte; the
/// unused high bits are always zero, so equality only ever compares the
/// logical bit range.
///
/// Integer-valued hashes are stored least-significant byte first.
///
/// # Example
///
/// ```
/// use hashrs::HashValue;
///
/// let value = HashValue::from_u64(0xABC, 12);
/// assert_eq!(value.as_bytes(), &[0xBC, 0x0A]);
/// assert_eq!(value.to_u64(), Some(0xABC));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashValue {
    bytes: Bytes,
    bit_length: usize,
}

impl HashValue {
    /// Creates a hash value from raw bytes.
    ///
    /// The input is truncated or zero-padded to `ceil(bit_length / 8)` bytes
    /// and bits beyond `bit_length` are cleared.
    pub fn new(bytes: impl AsRef<[u8]>, bit_length: usize) -> Self {
        let byte_length = bit_length.div_ceil(8);
        let mut data = bytes.as_ref().to_vec();
        data.resize(byte_length, 0);

        let used = bit_length % 8;
        if used != 0 {
            if let Some(last) = data.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }

        Self {
            bytes: Bytes::from(data),
            bit_length,
        }
    }

    /// Creates a hash value from the low `bit_length` bits of an integer.
    ///
    /// `bit_length` values above 64 are clamped to 64.
    pub fn from_u64(value: u64, bit_length: usize) -> Self {
        let bit_length = bit_length.min(64);
        let byte_length = bit_length.div_ceil(8);
        Self::new(&value.to_le_bytes()[..byte_length], bit_length)
    }

    /// Returns the logical size of the hash in bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Returns the hash bytes, least-significant byte first for integer hashes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the value and returns the underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Interprets the value as a little-endian integer.
    ///
    /// Returns `None` for values wider than 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.bit_length > 64 {
            return None;
        }
        let mut buf = [0u8; 8];
        buf[..self.bytes.len()].copy_from_slice(&self.bytes);
        Some(u64::from_le_bytes(buf))
    }

    /// Returns the bytes as a lowercase hex string, in byte order.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(self.bytes.len() * 2);
        for byte in self.bytes.iter() {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Parses a hex string produced by [`HashValue::to_hex`].
    ///
    /// Returns `None` if the string is not valid hex or does not hold exactly
    /// `ceil(bit_length / 8)` bytes.
    pub fn from_hex(hex_str: &str, bit_length: usize) -> Option<Self> {
        let byte_length = bit_length.div_ceil(8);
        if !hex_str.is_ascii() || hex_str.len() != byte_length * 2 {
            return None;
        }
        let mut bytes = Vec::with_capacity(byte_length);
        for i in 0..byte_length {
            let byte_str = &hex_str[i * 2..i * 2 + 2];
            bytes.push(u8::from_str_radix(byte_str, 16).ok()?);
        }
        Some(Self::new(bytes, bit_length))
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_length_follows_bits() {
        assert_eq!(HashValue::new([0u8; 0], 0).as_bytes().len(), 0);
        assert_eq!(HashValue::new([0xFFu8], 1).as_bytes().len(), 1);
        assert_eq!(HashValue::new([0xFFu8; 2], 12).as_bytes().len(), 2);
        assert_eq!(HashValue::new([0xFFu8; 8], 64).as_bytes().len(), 8);
    }

    #[test]
    fn test_pads_and_truncates() {
        let value = HashValue::new([0x01u8], 32);
        assert_eq!(value.as_bytes(), &[0x01, 0, 0, 0]);

        let value = HashValue::new([1u8, 2, 3, 4, 5], 16);
        assert_eq!(value.as_bytes(), &[1, 2]);
    }

    #[test]
    fn test_equality_ignores_unused_bits() {
        let a = HashValue::new([0xFFu8, 0x0F], 12);
        let b = HashValue::new([0xFFu8, 0xFF], 12);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), &[0xFF, 0x0F]);

        // Same bytes, different logical size
        let c = HashValue::new([0xFFu8, 0x0F], 16);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_u64() {
        let value = HashValue::from_u64(0xCBF4_3926, 32);
        assert_eq!(value.as_bytes(), &[0x26, 0x39, 0xF4, 0xCB]);
        assert_eq!(value.to_u64(), Some(0xCBF4_3926));

        let value = HashValue::from_u64(0b11, 1);
        assert_eq!(value.as_bytes(), &[0x01]);
    }

    #[test]
    fn test_to_u64_too_wide() {
        let value = HashValue::new([0u8; 16], 128);
        assert_eq!(value.to_u64(), None);
    }

    #[test]
    fn test_hex() {
        let value = HashValue::from_u64(0xCBF4_3926, 32);
        assert_eq!(value.to_hex(), "2639f4cb");
        assert_eq!(value.to_string(), "2639f4cb");
        assert_eq!(HashValue::from_hex("2639f4cb", 32), Some(value));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(HashValue::from_hex("2639f4", 32).is_none());
        assert!(HashValue::from_hex("zz39f4cb", 32).is_none());
        assert!(HashValue::from_hex("é9f4cb", 32).is_none());
    }
}
