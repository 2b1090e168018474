//! Bob Jenkins' one-at-a-time hash.

use crate::error::HashError;
use crate::function::HashFunction;
use crate::transform::{BlockMixer, BlockTransformer, HashTransformer};
use crate::value::HashValue;

/// Jenkins one-at-a-time, 32 bits.
///
/// # Example
///
/// ```
/// use hashrs::{HashFunction, JenkinsOneAtATime};
///
/// let value = JenkinsOneAtATime::new().compute_hash(b"foobar")?;
/// assert_eq!(value.to_u64(), Some(0xf952_fde7));
/// # Ok::<(), hashrs::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsOneAtATime;

impl JenkinsOneAtATime {
    /// Creates the hash function.
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for JenkinsOneAtATime {
    fn hash_size_bits(&self) -> usize {
        32
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        let transformer =
            BlockTransformer::with_hash_size(self.hash_size_bits(), JenkinsMixer::default())?;
        Ok(Box::new(transformer))
    }
}

#[derive(Debug, Clone, Default)]
struct JenkinsMixer {
    hash: u32,
}

impl BlockMixer for JenkinsMixer {
    fn group_size(&self) -> usize {
        1
    }

    fn hash_size_bits(&self) -> usize {
        32
    }

    fn mix(&mut self, groups: &[u8]) {
        let mut hash = self.hash;
        for &byte in groups {
            hash = hash.wrapping_add(byte as u32);
            hash = hash.wrapping_add(hash << 10);
            hash ^= hash >> 6;
        }
        self.hash = hash;
    }

    fn finalize(&self, _remainder: &[u8]) -> HashValue {
        let mut hash = self.hash;
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash = hash.wrapping_add(hash << 15);
        HashValue::from_u64(hash as u64, 32)
    }
}
