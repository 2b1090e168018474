//! BLAKE3 backed by the `blake3` crate.
//!
//! BLAKE3 keeps its own tree-hashing state, so it plugs into the engine as a
//! [`HashTransformer`] directly rather than through a block mixer. Callers
//! cannot tell the difference.

use crate::config::Blake3Config;
use crate::error::HashError;
use crate::function::HashFunction;
use crate::transform::HashTransformer;
use crate::value::HashValue;

/// BLAKE3 with a configurable output size and optional key.
///
/// Output sizes other than 256 bits use the extendable output function, so a
/// shorter digest is a prefix of a longer one.
///
/// # Example
///
/// ```
/// use hashrs::{Blake3, Blake3Config, HashFunction};
///
/// let blake3 = Blake3::new(Blake3Config::new(512)?)?;
/// let value = blake3.compute_hash(b"hello world")?;
/// assert_eq!(value.as_bytes().len(), 64);
/// # Ok::<(), hashrs::HashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Blake3 {
    config: Blake3Config,
}

impl Blake3 {
    /// Creates a BLAKE3 function.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the output size is out of range
    /// or not a whole number of bytes.
    pub fn new(config: Blake3Config) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Blake3Config {
        &self.config
    }
}

impl HashFunction for Blake3 {
    fn hash_size_bits(&self) -> usize {
        self.config.hash_size_bits()
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        self.config.validate()?;

        let hasher = match self.config.key() {
            Some(key) => blake3::Hasher::new_keyed(&key),
            None => blake3::Hasher::new(),
        };

        Ok(Box::new(Blake3Transformer {
            hasher,
            hash_size_bits: self.config.hash_size_bits(),
            consumed: 0,
            finalized: false,
        }))
    }
}

#[derive(Debug, Clone)]
struct Blake3Transformer {
    hasher: blake3::Hasher,
    hash_size_bits: usize,
    consumed: u64,
    finalized: bool,
}

impl HashTransformer for Blake3Transformer {
    fn consume(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }
        self.hasher.update(data);
        self.consumed += data.len() as u64;
        Ok(())
    }

    fn finalize(&mut self) -> Result<HashValue, HashError> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }
        self.finalized = true;

        let mut output = vec![0u8; self.hash_size_bits / 8];
        self.hasher.finalize_xof().fill(&mut output);

        log::trace!(
            "finalized blake3 after {} bytes ({} bits)",
            self.consumed,
            self.hash_size_bits
        );
        Ok(HashValue::new(output, self.hash_size_bits))
    }

    fn duplicate(&self) -> Box<dyn HashTransformer> {
        Box::new(self.clone())
    }

    fn consumed(&self) -> u64 {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_digest() {
        let value = Blake3::default().compute_hash(b"").unwrap();
        assert_eq!(
            value.to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_matches_one_shot() {
        let value = Blake3::default().compute_hash(b"hello world").unwrap();
        assert_eq!(value.as_bytes(), blake3::hash(b"hello world").as_bytes());
    }

    #[test]
    fn test_short_output_is_prefix() {
        let short = Blake3::new(Blake3Config::new(64).unwrap()).unwrap();
        let long = Blake3::new(Blake3Config::new(1024).unwrap()).unwrap();

        let short = short.compute_hash(b"prefix").unwrap();
        let long = long.compute_hash(b"prefix").unwrap();
        assert_eq!(short.as_bytes(), &long.as_bytes()[..8]);
    }

    #[test]
    fn test_keyed() {
        let key = [7u8; 32];
        let keyed = Blake3::new(Blake3Config::default().with_key(Some(key))).unwrap();
        let value = keyed.compute_hash(b"data").unwrap();
        assert_eq!(value.as_bytes(), blake3::keyed_hash(&key, b"data").as_bytes());
    }

    #[test]
    fn test_misuse_after_finalize() {
        let mut transformer = Blake3::default().create_transformer().unwrap();
        transformer.consume(b"abc").unwrap();
        let copy = transformer.duplicate();

        transformer.finalize().unwrap();
        assert!(matches!(transformer.consume(b"x"), Err(HashError::AlreadyFinalized)));
        assert!(matches!(transformer.finalize(), Err(HashError::AlreadyFinalized)));
        assert_eq!(copy.consumed(), 3);
    }
}
