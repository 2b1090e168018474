//! Configuration for hash functions.
//!
//! This module provides the parameter sets that hash functions are built from:
//!
//! - [`CrcConfig`] - Width, polynomial, initial value, reflection and output XOR
//! - [`FnvConfig`] - FNV output size
//! - [`Blake3Config`] - BLAKE3 output size and optional key (`hash-blake3` feature)
//!
//! Every configuration is a plain value. Builders (`with_*`) never validate;
//! call `validate()` or hand the configuration to a hash function, which
//! rejects invalid parameters before any data is processed.
//!
//! # Example
//!
//! ```
//! use hashrs::CrcConfig;
//!
//! // CRC-16/CCITT-FALSE
//! let config = CrcConfig::new(16, 0x1021, 0xFFFF, false, false, 0x0000)?;
//! assert_eq!(config.bits(), 16);
//!
//! // Builder pattern, validated afterwards
//! let config = CrcConfig::default().with_bits(65);
//! assert!(config.validate().is_err());
//! # Ok::<(), hashrs::HashError>(())
//! ```

use crate::error::HashError;
use crate::util::low_mask;

/// Smallest supported CRC width.
pub const MIN_CRC_BITS: u32 = 1;

/// Largest supported CRC width.
pub const MAX_CRC_BITS: u32 = 64;

/// Parameters of a cyclic redundancy check.
///
/// The width (`bits`) fixes both the size of the produced hash and the shape
/// of the division table: 256 entries for widths of 8 bits and more, 2 entries
/// below that.
///
/// # Constraints
///
/// - `bits` between 1 and 64
/// - `polynomial`, `initial_value` and `xor_out` fit in `bits` bits
///
/// # Example
///
/// ```
/// use hashrs::CrcConfig;
///
/// // CRC-32 (ISO-HDLC)
/// let config = CrcConfig::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
/// assert!(config.reflect_in());
///
/// let same = CrcConfig::default();
/// assert_eq!(config, same);
/// # Ok::<(), hashrs::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcConfig {
    bits: u32,
    polynomial: u64,
    initial_value: u64,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u64,
}

impl CrcConfig {
    /// Creates a new CRC parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if:
    /// - `bits` is outside `1..=64`
    /// - `polynomial`, `initial_value` or `xor_out` has bits set above `bits`
    pub fn new(
        bits: u32,
        polynomial: u64,
        initial_value: u64,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u64,
    ) -> Result<Self, HashError> {
        if !(MIN_CRC_BITS..=MAX_CRC_BITS).contains(&bits) {
            return Err(HashError::InvalidConfig {
                message: "crc bits must be between 1 and 64",
            });
        }

        let mask = low_mask(bits);

        if polynomial & !mask != 0 {
            return Err(HashError::InvalidConfig {
                message: "crc polynomial does not fit in the configured bits",
            });
        }

        if initial_value & !mask != 0 {
            return Err(HashError::InvalidConfig {
                message: "crc initial value does not fit in the configured bits",
            });
        }

        if xor_out & !mask != 0 {
            return Err(HashError::InvalidConfig {
                message: "crc xor_out does not fit in the configured bits",
            });
        }

        Ok(Self::new_unchecked(
            bits,
            polynomial,
            initial_value,
            reflect_in,
            reflect_out,
            xor_out,
        ))
    }

    /// Builds a parameter set known to be valid (catalogue entries).
    pub(crate) const fn new_unchecked(
        bits: u32,
        polynomial: u64,
        initial_value: u64,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u64,
    ) -> Self {
        Self {
            bits,
            polynomial,
            initial_value,
            reflect_in,
            reflect_out,
            xor_out,
        }
    }

    /// Sets the CRC width in bits.
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    /// Sets the generator polynomial (normal, non-reflected notation).
    pub fn with_polynomial(mut self, polynomial: u64) -> Self {
        self.polynomial = polynomial;
        self
    }

    /// Sets the register value before any input is processed.
    pub fn with_initial_value(mut self, initial_value: u64) -> Self {
        self.initial_value = initial_value;
        self
    }

    /// Sets whether input bytes are processed least-significant bit first.
    pub fn with_reflect_in(mut self, reflect_in: bool) -> Self {
        self.reflect_in = reflect_in;
        self
    }

    /// Sets whether the final register is bit-reversed before the output XOR.
    pub fn with_reflect_out(mut self, reflect_out: bool) -> Self {
        self.reflect_out = reflect_out;
        self
    }

    /// Sets the value XORed into the final register.
    pub fn with_xor_out(mut self, xor_out: u64) -> Self {
        self.xor_out = xor_out;
        self
    }

    /// Returns the CRC width in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns the generator polynomial.
    pub fn polynomial(&self) -> u64 {
        self.polynomial
    }

    /// Returns the initial register value.
    pub fn initial_value(&self) -> u64 {
        self.initial_value
    }

    /// Returns whether input is reflected.
    pub fn reflect_in(&self) -> bool {
        self.reflect_in
    }

    /// Returns whether output is reflected.
    pub fn reflect_out(&self) -> bool {
        self.reflect_out
    }

    /// Returns the output XOR mask.
    pub fn xor_out(&self) -> u64 {
        self.xor_out
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(
            self.bits,
            self.polynomial,
            self.initial_value,
            self.reflect_in,
            self.reflect_out,
            self.xor_out,
        )
        .map(|_| ())
    }
}

impl Default for CrcConfig {
    /// CRC-32 (ISO-HDLC), the checksum used by zlib, PNG and Ethernet.
    fn default() -> Self {
        Self::new_unchecked(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)
    }
}

/// Configuration for the FNV-1 and FNV-1a hash functions.
///
/// Only the 32- and 64-bit variants are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FnvConfig {
    hash_size_bits: usize,
}

impl FnvConfig {
    /// Creates a new FNV configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] unless `hash_size_bits` is 32 or 64.
    pub fn new(hash_size_bits: usize) -> Result<Self, HashError> {
        if hash_size_bits != 32 && hash_size_bits != 64 {
            return Err(HashError::InvalidConfig {
                message: "fnv hash size must be 32 or 64 bits",
            });
        }
        Ok(Self { hash_size_bits })
    }

    /// Sets the output size in bits.
    pub fn with_hash_size_bits(mut self, hash_size_bits: usize) -> Self {
        self.hash_size_bits = hash_size_bits;
        self
    }

    /// Returns the output size in bits.
    pub fn hash_size_bits(&self) -> usize {
        self.hash_size_bits
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(self.hash_size_bits).map(|_| ())
    }
}

impl Default for FnvConfig {
    fn default() -> Self {
        Self { hash_size_bits: 32 }
    }
}

/// Smallest BLAKE3 output size in bits.
#[cfg(feature = "hash-blake3")]
pub const MIN_BLAKE3_BITS: usize = 8;

/// Largest BLAKE3 output size in bits.
#[cfg(feature = "hash-blake3")]
pub const MAX_BLAKE3_BITS: usize = 4096;

/// Configuration for BLAKE3 hashing.
///
/// BLAKE3 is an extendable-output function; any whole number of bytes between
/// 1 and 512 may be requested. Defaults to the standard 256-bit digest.
#[cfg(feature = "hash-blake3")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake3Config {
    hash_size_bits: usize,
    key: Option<[u8; 32]>,
}

#[cfg(feature = "hash-blake3")]
impl Blake3Config {
    /// Creates a new BLAKE3 configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if `hash_size_bits` is outside
    /// `8..=4096` or not a multiple of 8.
    pub fn new(hash_size_bits: usize) -> Result<Self, HashError> {
        if !(MIN_BLAKE3_BITS..=MAX_BLAKE3_BITS).contains(&hash_size_bits) {
            return Err(HashError::InvalidConfig {
                message: "blake3 hash size must be between 8 and 4096 bits",
            });
        }

        if hash_size_bits % 8 != 0 {
            return Err(HashError::InvalidConfig {
                message: "blake3 hash size must be a multiple of 8",
            });
        }

        Ok(Self {
            hash_size_bits,
            key: None,
        })
    }

    /// Sets the output size in bits.
    pub fn with_hash_size_bits(mut self, hash_size_bits: usize) -> Self {
        self.hash_size_bits = hash_size_bits;
        self
    }

    /// Sets the key for keyed hashing mode.
    pub fn with_key(mut self, key: Option<[u8; 32]>) -> Self {
        self.key = key;
        self
    }

    /// Returns the output size in bits.
    pub fn hash_size_bits(&self) -> usize {
        self.hash_size_bits
    }

    /// Returns the key, if keyed mode is enabled.
    pub fn key(&self) -> Option<[u8; 32]> {
        self.key
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(self.hash_size_bits).map(|_| ())
    }
}

#[cfg(feature = "hash-blake3")]
impl Default for Blake3Config {
    fn default() -> Self {
        Self {
            hash_size_bits: 256,
            key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc_config_default_is_crc32() {
        let config = CrcConfig::default();
        assert_eq!(config.bits(), 32);
        assert_eq!(config.polynomial(), 0x04C1_1DB7);
        assert_eq!(config.initial_value(), 0xFFFF_FFFF);
        assert!(config.reflect_in());
        assert!(config.reflect_out());
        assert_eq!(config.xor_out(), 0xFFFF_FFFF);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_crc_config_builder() {
        let config = CrcConfig::default()
            .with_bits(16)
            .with_polynomial(0x1021)
            .with_initial_value(0xFFFF)
            .with_reflect_in(false)
            .with_reflect_out(false)
            .with_xor_out(0);
        assert_eq!(
            config,
            CrcConfig::new(16, 0x1021, 0xFFFF, false, false, 0).unwrap()
        );
    }

    #[test]
    fn test_crc_config_invalid_bits() {
        assert!(CrcConfig::new(0, 0, 0, false, false, 0).is_err());
        assert!(CrcConfig::new(65, 0, 0, false, false, 0).is_err());
        assert!(CrcConfig::new(1, 1, 0, false, false, 0).is_ok());
        assert!(CrcConfig::new(64, u64::MAX, u64::MAX, true, true, u64::MAX).is_ok());
    }

    #[test]
    fn test_crc_config_values_must_fit() {
        assert!(CrcConfig::new(8, 0x107, 0, false, false, 0).is_err());
        assert!(CrcConfig::new(8, 0x07, 0x100, false, false, 0).is_err());
        assert!(CrcConfig::new(8, 0x07, 0, false, false, 0x1FF).is_err());
    }

    #[test]
    fn test_crc_config_validate() {
        let config = CrcConfig::default().with_bits(12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fnv_config() {
        assert_eq!(FnvConfig::default().hash_size_bits(), 32);
        assert!(FnvConfig::new(64).is_ok());
        assert!(FnvConfig::new(128).is_err());
        assert!(FnvConfig::default().with_hash_size_bits(48).validate().is_err());
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_blake3_config() {
        assert_eq!(Blake3Config::default().hash_size_bits(), 256);
        assert!(Blake3Config::new(8).is_ok());
        assert!(Blake3Config::new(4096).is_ok());
        assert!(Blake3Config::new(0).is_err());
        assert!(Blake3Config::new(12).is_err());
        assert!(Blake3Config::new(4104).is_err());

        let key = [7u8; 32];
        let config = Blake3Config::default().with_key(Some(key));
        assert_eq!(config.key(), Some(key));
        assert!(config.validate().is_ok());
    }
}
