//! Generalized cyclic redundancy checks.
//!
//! This module provides a single table-driven CRC engine covering every width
//! from 1 to 64 bits:
//!
//! - [`Crc`] - A configured CRC hash function
//! - [`CrcMixer`] - The register and update step driven by [`BlockTransformer`]
//! - [`CrcTable`] - The precomputed division table
//! - [`CrcStandard`] - The read-only catalogue of named standards
//!
//! Widths of 8 bits and more are processed a byte at a time, narrower widths
//! a bit at a time. Reflected configurations keep the register bit-reversed
//! for the whole computation, so the same table lookup serves both orders.
//!
//! # Example
//!
//! ```
//! use hashrs::{Crc, CrcStandard, HashFunction};
//!
//! let crc = Crc::standard(CrcStandard::Crc16Ibm3740);
//! let value = crc.compute_hash(b"123456789")?;
//! assert_eq!(value.to_u64(), Some(0x29B1));
//!
//! // Same as Crc::default()
//! let crc32 = Crc::from_name("CRC-32")?;
//! assert_eq!(crc32.checksum(b"123456789"), 0xCBF4_3926);
//! # Ok::<(), hashrs::HashError>(())
//! ```

mod standards;
mod table;

pub use standards::CrcStandard;
pub use table::CrcTable;

use std::sync::Arc;

use crate::config::CrcConfig;
use crate::error::HashError;
use crate::function::HashFunction;
use crate::transform::{BlockMixer, BlockTransformer, HashTransformer};
use crate::util::{low_mask, reflect_bits};
use crate::value::HashValue;

/// A CRC hash function.
///
/// Holds a validated configuration and its division table. The table is built
/// once and shared by every transformer the function hands out, so cloning a
/// `Crc` or creating transformers is cheap.
///
/// The default is CRC-32 (ISO-HDLC).
#[derive(Debug, Clone)]
pub struct Crc {
    config: CrcConfig,
    table: Arc<CrcTable>,
}

impl Crc {
    /// Creates a CRC function from custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the parameters are invalid.
    pub fn new(config: CrcConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Creates a CRC function for a catalogued standard.
    pub fn standard(standard: CrcStandard) -> Self {
        Self::from_valid(standard.config())
    }

    /// Creates a CRC function from a standard's name or alias.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownStandard`] if no standard matches `name`.
    pub fn from_name(name: &str) -> Result<Self, HashError> {
        CrcStandard::from_name(name)
            .map(Self::standard)
            .ok_or_else(|| HashError::UnknownStandard(name.to_string()))
    }

    fn from_valid(config: CrcConfig) -> Self {
        Self {
            table: Arc::new(CrcTable::build(&config)),
            config,
        }
    }

    /// Returns the CRC parameters.
    pub fn config(&self) -> &CrcConfig {
        &self.config
    }

    /// Returns the division table.
    pub fn table(&self) -> &CrcTable {
        &self.table
    }

    /// Creates a typed transformer, without boxing.
    pub fn transformer(&self) -> BlockTransformer<CrcMixer> {
        BlockTransformer::new(CrcMixer::new(self.config, Arc::clone(&self.table)))
    }

    /// Computes the CRC of `data` as an integer.
    pub fn checksum(&self, data: &[u8]) -> u64 {
        let mut mixer = CrcMixer::new(self.config, Arc::clone(&self.table));
        mixer.mix(data);
        mixer.value()
    }
}

impl Default for Crc {
    fn default() -> Self {
        Self::standard(CrcStandard::Crc32IsoHdlc)
    }
}

impl HashFunction for Crc {
    fn hash_size_bits(&self) -> usize {
        self.config.bits() as usize
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        self.config.validate()?;

        let mixer = CrcMixer::new(self.config, Arc::clone(&self.table));
        let transformer = BlockTransformer::with_hash_size(self.hash_size_bits(), mixer)?;
        Ok(Box::new(transformer))
    }
}

/// The CRC register and its update step.
///
/// Mixes one byte at a time, so the block transformer never holds a
/// remainder for CRCs.
#[derive(Debug, Clone)]
pub struct CrcMixer {
    config: CrcConfig,
    table: Arc<CrcTable>,
    register: u64,
}

impl CrcMixer {
    /// Creates a mixer with its register set to the initial value.
    pub(crate) fn new(config: CrcConfig, table: Arc<CrcTable>) -> Self {
        let register = if config.reflect_in() {
            reflect_bits(config.initial_value(), config.bits())
        } else {
            config.initial_value()
        };

        Self {
            config,
            table,
            register,
        }
    }

    /// Returns the finalized CRC of everything mixed so far.
    pub fn value(&self) -> u64 {
        let bits = self.config.bits();
        let mut value = self.register;

        if self.config.reflect_in() != self.config.reflect_out() {
            value = reflect_bits(value, bits);
        }

        (value ^ self.config.xor_out()) & low_mask(bits)
    }

    fn update_bytes(&mut self, data: &[u8]) {
        let mut register = self.register;

        if self.config.reflect_in() {
            for &byte in data {
                register = (register >> 8) ^ self.table.get((register ^ byte as u64) & 0xFF);
            }
        } else {
            // Bits above the width are masked off in value()
            let shift = self.config.bits() - 8;
            for &byte in data {
                let index = ((register >> shift) ^ byte as u64) & 0xFF;
                register = (register << 8) ^ self.table.get(index);
            }
        }

        self.register = register;
    }

    fn update_bits(&mut self, data: &[u8]) {
        let mut register = self.register;

        if self.config.reflect_in() {
            for &byte in data {
                for i in 0..8 {
                    let bit = (register ^ (byte >> i) as u64) & 1;
                    register = (register >> 1) ^ self.table.get(bit);
                }
            }
        } else {
            let shift = self.config.bits() - 1;
            for &byte in data {
                for i in (0..8).rev() {
                    let bit = ((register >> shift) ^ (byte >> i) as u64) & 1;
                    register = (register << 1) ^ self.table.get(bit);
                }
            }
        }

        self.register = register;
    }
}

impl BlockMixer for CrcMixer {
    fn group_size(&self) -> usize {
        1
    }

    fn hash_size_bits(&self) -> usize {
        self.config.bits() as usize
    }

    fn mix(&mut self, groups: &[u8]) {
        if self.table.unit_bits() == 8 {
            self.update_bytes(groups);
        } else {
            self.update_bits(groups);
        }
    }

    fn finalize(&self, _remainder: &[u8]) -> HashValue {
        HashValue::from_u64(self.value(), self.config.bits() as usize)
    }
}
