//! Fowler-Noll-Vo hashes, FNV-1 and FNV-1a.

use crate::config::FnvConfig;
use crate::error::HashError;
use crate::function::HashFunction;
use crate::transform::{BlockMixer, BlockTransformer, HashTransformer};
use crate::value::HashValue;

const PRIME_32: u32 = 16_777_619;
const OFFSET_32: u32 = 2_166_136_261;
const PRIME_64: u64 = 1_099_511_628_211;
const OFFSET_64: u64 = 14_695_981_039_346_656_037;

/// FNV-1: multiply, then xor each byte.
///
/// # Example
///
/// ```
/// use hashrs::{Fnv1, FnvConfig, HashFunction};
///
/// let fnv = Fnv1::new(FnvConfig::new(64)?)?;
/// let value = fnv.compute_hash(b"foobar")?;
/// assert_eq!(value.to_u64(), Some(0x340d_8765_a4dd_a9c2));
/// # Ok::<(), hashrs::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1 {
    config: FnvConfig,
}

/// FNV-1a: xor each byte, then multiply.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1a {
    config: FnvConfig,
}

impl Fnv1 {
    /// Creates an FNV-1 function.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] for sizes other than 32 and 64 bits.
    pub fn new(config: FnvConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FnvConfig {
        &self.config
    }
}

impl Fnv1a {
    /// Creates an FNV-1a function.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] for sizes other than 32 and 64 bits.
    pub fn new(config: FnvConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FnvConfig {
        &self.config
    }
}

impl HashFunction for Fnv1 {
    fn hash_size_bits(&self) -> usize {
        self.config.hash_size_bits()
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        let mixer = FnvMixer::new(&self.config, false)?;
        Ok(Box::new(BlockTransformer::with_hash_size(self.hash_size_bits(), mixer)?))
    }
}

impl HashFunction for Fnv1a {
    fn hash_size_bits(&self) -> usize {
        self.config.hash_size_bits()
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        let mixer = FnvMixer::new(&self.config, true)?;
        Ok(Box::new(BlockTransformer::with_hash_size(self.hash_size_bits(), mixer)?))
    }
}

#[derive(Debug, Clone, Copy)]
enum FnvState {
    Bits32(u32),
    Bits64(u64),
}

#[derive(Debug, Clone)]
struct FnvMixer {
    state: FnvState,
    xor_first: bool,
}

impl FnvMixer {
    fn new(config: &FnvConfig, xor_first: bool) -> Result<Self, HashError> {
        let state = match config.hash_size_bits() {
            32 => FnvState::Bits32(OFFSET_32),
            64 => FnvState::Bits64(OFFSET_64),
            _ => {
                return Err(HashError::InvalidConfig {
                    message: "fnv hash size must be 32 or 64 bits",
                });
            }
        };
        Ok(Self { state, xor_first })
    }
}

impl BlockMixer for FnvMixer {
    fn group_size(&self) -> usize {
        1
    }

    fn hash_size_bits(&self) -> usize {
        match self.state {
            FnvState::Bits32(_) => 32,
            FnvState::Bits64(_) => 64,
        }
    }

    fn mix(&mut self, groups: &[u8]) {
        match &mut self.state {
            FnvState::Bits32(hash) => {
                for &byte in groups {
                    *hash = if self.xor_first {
                        (*hash ^ byte as u32).wrapping_mul(PRIME_32)
                    } else {
                        hash.wrapping_mul(PRIME_32) ^ byte as u32
                    };
                }
            }
            FnvState::Bits64(hash) => {
                for &byte in groups {
                    *hash = if self.xor_first {
                        (*hash ^ byte as u64).wrapping_mul(PRIME_64)
                    } else {
                        hash.wrapping_mul(PRIME_64) ^ byte as u64
                    };
                }
            }
        }
    }

    fn finalize(&self, _remainder: &[u8]) -> HashValue {
        match self.state {
            FnvState::Bits32(hash) => HashValue::from_u64(hash as u64, 32),
            FnvState::Bits64(hash) => HashValue::from_u64(hash, 64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnv1(bits: usize) -> Fnv1 {
        Fnv1::new(FnvConfig::new(bits).unwrap()).unwrap()
    }

    fn fnv1a(bits: usize) -> Fnv1a {
        Fnv1a::new(FnvConfig::new(bits).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(fnv1(32).compute_hash(b"").unwrap().to_u64(), Some(0x811c_9dc5));
        assert_eq!(fnv1a(32).compute_hash(b"").unwrap().to_u64(), Some(0x811c_9dc5));
        assert_eq!(
            fnv1(64).compute_hash(b"").unwrap().to_u64(),
            Some(0xcbf2_9ce4_8422_2325)
        );
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fnv1(32).compute_hash(b"foobar").unwrap().to_u64(), Some(0x31f0_b262));
        assert_eq!(fnv1a(32).compute_hash(b"foobar").unwrap().to_u64(), Some(0xbf9c_f968));
        assert_eq!(
            fnv1a(64).compute_hash(b"foobar").unwrap().to_u64(),
            Some(0x8594_4171_f739_67e8)
        );
        assert_eq!(
            fnv1(64).compute_hash(b"123456789").unwrap().to_u64(),
            Some(0xa72f_fc36_2bf9_16d6)
        );
        assert_eq!(
            fnv1a(64).compute_hash(b"123456789").unwrap().to_u64(),
            Some(0x06d5_5739_23c6_cdfc)
        );
    }

    #[test]
    fn test_default_is_32_bits() {
        assert_eq!(Fnv1a::default().hash_size_bits(), 32);
        assert_eq!(Fnv1::default().config(), &FnvConfig::default());
    }

    #[test]
    fn test_wide_sizes_rejected() {
        let config = FnvConfig::default().with_hash_size_bits(128);
        assert!(matches!(Fnv1::new(config), Err(HashError::InvalidConfig { .. })));
        assert!(Fnv1a::new(config).is_err());
    }
}
