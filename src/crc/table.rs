//! Division tables for the table-driven CRC engine.

use crate::config::CrcConfig;
use crate::error::HashError;
use crate::util::{low_mask, reflect_bits};

/// Precomputed polynomial division table.
///
/// Widths of 8 bits and more process a byte per step and get a 256-entry
/// table. Narrower widths process a single bit per step and get 2 entries.
///
/// For reflected-input configurations the entries are stored bit-reversed
/// over the CRC width, so that every entry of a reflected table is the mirror
/// image of the corresponding entry of the non-reflected table.
///
/// Tables are immutable once built and shared between transformers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcTable {
    entries: Box<[u64]>,
    unit_bits: u32,
}

impl CrcTable {
    /// Builds the division table for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the parameters are invalid.
    pub fn new(config: &CrcConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Builds the table for a configuration that is known to be valid.
    pub(crate) fn build(config: &CrcConfig) -> Self {
        let bits = config.bits();
        let unit_bits = if bits >= 8 { 8 } else { 1 };
        let top_bit = 1u64 << (bits - 1);
        let mask = low_mask(bits);

        let entries: Box<[u64]> = (0..1u64 << unit_bits)
            .map(|index| {
                let mut value = index;
                if config.reflect_in() && unit_bits > 1 {
                    value = reflect_bits(value, unit_bits);
                }
                value <<= bits - unit_bits;

                for _ in 0..unit_bits {
                    value = if value & top_bit != 0 {
                        (value << 1) ^ config.polynomial()
                    } else {
                        value << 1
                    };
                }

                if config.reflect_in() {
                    value = reflect_bits(value, bits);
                }
                value & mask
            })
            .collect();

        log::debug!(
            "built crc table: bits={}, poly={:#x}, reflected={}, entries={}",
            bits,
            config.polynomial(),
            config.reflect_in(),
            entries.len()
        );

        Self { entries, unit_bits }
    }

    /// Returns the table entries.
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Number of entries: 256 for byte-wise tables, 2 for bit-wise tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; every table has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bits consumed per table lookup (8 or 1).
    pub fn unit_bits(&self) -> u32 {
        self.unit_bits
    }

    #[inline]
    pub(crate) fn get(&self, index: u64) -> u64 {
        self.entries[index as usize]
    }
}
