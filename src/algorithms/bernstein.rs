//! Daniel J. Bernstein's multiplicative hashes.

use crate::error::HashError;
use crate::function::HashFunction;
use crate::transform::{BlockMixer, BlockTransformer, HashTransformer};
use crate::value::HashValue;

/// Bernstein hash (djb2 step `h = 33 * h + b`), 32 bits, seeded with zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct BernsteinHash;

impl BernsteinHash {
    /// Creates the hash function.
    pub fn new() -> Self {
        Self
    }
}

/// Modified Bernstein hash (`h = 33 * h ^ b`), 32 bits, seeded with zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedBernsteinHash;

impl ModifiedBernsteinHash {
    /// Creates the hash function.
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for BernsteinHash {
    fn hash_size_bits(&self) -> usize {
        32
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        let mixer = BernsteinMixer::new(false);
        Ok(Box::new(BlockTransformer::with_hash_size(32, mixer)?))
    }
}

impl HashFunction for ModifiedBernsteinHash {
    fn hash_size_bits(&self) -> usize {
        32
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        let mixer = BernsteinMixer::new(true);
        Ok(Box::new(BlockTransformer::with_hash_size(32, mixer)?))
    }
}

#[derive(Debug, Clone)]
struct BernsteinMixer {
    hash: u32,
    xor: bool,
}

impl BernsteinMixer {
    fn new(xor: bool) -> Self {
        Self { hash: 0, xor }
    }
}

impl BlockMixer for BernsteinMixer {
    fn group_size(&self) -> usize {
        1
    }

    fn hash_size_bits(&self) -> usize {
        32
    }

    fn mix(&mut self, groups: &[u8]) {
        let mut hash = self.hash;
        if self.xor {
            for &byte in groups {
                hash = hash.wrapping_mul(33) ^ byte as u32;
            }
        } else {
            for &byte in groups {
                hash = hash.wrapping_mul(33).wrapping_add(byte as u32);
            }
        }
        self.hash = hash;
    }

    fn finalize(&self, _remainder: &[u8]) -> HashValue {
        HashValue::from_u64(self.hash as u64, 32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bernstein_known_values() {
        let hash = BernsteinHash::new();
        assert_eq!(hash.compute_hash(b"").unwrap().to_u64(), Some(0));
        assert_eq!(hash.compute_hash(b"foobar").unwrap().to_u64(), Some(0xf605_5bf9));
        assert_eq!(hash.compute_hash(b"123456789").unwrap().to_u64(), Some(0x43b1_30dd));
    }

    #[test]
    fn test_modified_bernstein_known_values() {
        let hash = ModifiedBernsteinHash::new();
        assert_eq!(hash.compute_hash(b"").unwrap().to_u64(), Some(0));
        assert_eq!(hash.compute_hash(b"foobar").unwrap().to_u64(), Some(0xf030_b397));
        assert_eq!(hash.compute_hash(b"123456789").unwrap().to_u64(), Some(0x0d07_53b1));
    }
}
