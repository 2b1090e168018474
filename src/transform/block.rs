//! Core hashing engine - BlockTransformer with streaming API.
//!
//! This module turns a byte-group mixing function into a resumable
//! accumulator:
//!
//! - [`BlockMixer`] - Per-algorithm register, mixing step and finalization
//! - [`BlockTransformer`] - Buffers partial groups across calls
//! - `consume()` - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finalize()` - Flush the remainder and produce the hash value
//!
//! # Example
//!
//! ```
//! use hashrs::{HashFunction, HashTransformer, JenkinsOneAtATime};
//!
//! let mut transformer = JenkinsOneAtATime::new().create_transformer()?;
//!
//! // Feed data in any size
//! transformer.consume(b"foo")?;
//! transformer.consume(b"bar")?;
//!
//! let value = transformer.finalize()?;
//! assert_eq!(value.to_u64(), Some(0xf952_fde7));
//! # Ok::<(), hashrs::HashError>(())
//! ```

use std::fmt;

use crate::error::HashError;
use crate::transform::HashTransformer;
use crate::value::HashValue;

/// The per-algorithm half of a block transformer.
///
/// A mixer owns the working register of one hash computation. The transformer
/// hands it whole groups of `group_size()` bytes and, once input ends, the
/// remainder that never filled a group.
///
/// Implementors must be cheap to clone: cloning a mixer is how a
/// transformer's state is duplicated mid-stream.
pub trait BlockMixer: Clone + Send + Sync + fmt::Debug + 'static {
    /// Number of bytes the algorithm mixes atomically.
    fn group_size(&self) -> usize;

    /// Size of the produced hash value in bits.
    fn hash_size_bits(&self) -> usize;

    /// Mixes `groups` into the register.
    ///
    /// `groups.len()` is always a non-zero multiple of `group_size()`.
    fn mix(&mut self, groups: &[u8]);

    /// Produces the hash value.
    ///
    /// `remainder` holds the trailing `0..group_size()` bytes that never
    /// formed a whole group; the algorithm decides whether to pad, mix or
    /// ignore them.
    fn finalize(&self, remainder: &[u8]) -> HashValue;
}

/// A stateful accumulator that processes streaming bytes in whole groups.
///
/// `BlockTransformer` keeps at most `group_size - 1` bytes between calls.
/// Every complete group is passed to the mixer immediately, so memory use is
/// independent of the input length.
///
/// # Determinism
///
/// The final hash is identical regardless of:
/// - How many bytes are consumed at once (1 byte vs 1MB)
/// - Number of `consume()` calls
/// - Where chunk boundaries fall relative to group boundaries
///
/// # Lifecycle
///
/// - `consume()` any number of times
/// - `duplicate()` to fork the computation at the current position
/// - `finalize()` exactly once; later calls report
///   [`HashError::AlreadyFinalized`]
#[derive(Debug, Clone)]
pub struct BlockTransformer<M> {
    mixer: M,
    group_size: usize,
    pending: Vec<u8>,
    consumed: u64,
    finalized: bool,
}

impl<M: BlockMixer> BlockTransformer<M> {
    /// Creates a transformer around a mixer.
    ///
    /// A mixer reporting a group size of zero is treated as a group size of
    /// one; use [`BlockTransformer::with_hash_size`] to have that rejected.
    pub fn new(mixer: M) -> Self {
        let group_size = mixer.group_size().max(1);
        Self {
            mixer,
            group_size,
            pending: Vec::with_capacity(group_size),
            consumed: 0,
            finalized: false,
        }
    }

    /// Creates a transformer, checking the mixer against the size declared by
    /// the owning hash function.
    ///
    /// # Errors
    ///
    /// - [`HashError::HashSizeMismatch`] if the mixer produces a different size
    /// - [`HashError::InvalidConfig`] if the mixer reports a zero group size
    pub fn with_hash_size(declared_bits: usize, mixer: M) -> Result<Self, HashError> {
        let actual = mixer.hash_size_bits();
        if actual != declared_bits {
            return Err(HashError::HashSizeMismatch {
                declared: declared_bits,
                actual,
            });
        }

        if mixer.group_size() == 0 {
            return Err(HashError::InvalidConfig {
                message: "group size must be non-zero",
            });
        }

        Ok(Self::new(mixer))
    }

    /// Consumes the next fragment of input.
    ///
    /// # Processing Flow
    ///
    /// 1. Top up the pending partial group from the front of `data`
    /// 2. Mix all whole groups of the rest of `data` in one call
    /// 3. Keep the trailing partial group as pending
    ///
    /// Zero-length fragments are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::AlreadyFinalized`] after [`finalize`](Self::finalize).
    pub fn consume(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }

        self.consumed += data.len() as u64;
        let mut data = data;

        // Complete a group started by an earlier call
        if !self.pending.is_empty() {
            let needed = self.group_size - self.pending.len();
            if data.len() < needed {
                self.pending.extend_from_slice(data);
                return Ok(());
            }

            self.pending.extend_from_slice(&data[..needed]);
            self.mixer.mix(&self.pending);
            self.pending.clear();
            data = &data[needed..];
        }

        let whole = data.len() - data.len() % self.group_size;
        if whole > 0 {
            self.mixer.mix(&data[..whole]);
        }

        self.pending.extend_from_slice(&data[whole..]);
        Ok(())
    }

    /// Returns an independent copy of the current state.
    ///
    /// The copy owns its own register and pending bytes; consuming into one
    /// never affects the other.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Finalizes the computation and returns the hash value.
    ///
    /// The pending bytes are handed to the mixer and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::AlreadyFinalized`] if called more than once.
    pub fn finalize(&mut self) -> Result<HashValue, HashError> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }
        self.finalized = true;

        let value = self.mixer.finalize(&self.pending);
        self.pending.clear();

        log::trace!(
            "finalized {} bytes into a {}-bit hash",
            self.consumed,
            value.bit_length()
        );
        Ok(value)
    }

    /// Returns the total number of bytes consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns the number of bytes waiting for a group to fill.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true once [`finalize`](Self::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Returns the mixer holding the working register.
    pub fn mixer(&self) -> &M {
        &self.mixer
    }
}

impl<M: BlockMixer> HashTransformer for BlockTransformer<M> {
    fn consume(&mut self, data: &[u8]) -> Result<(), HashError> {
        BlockTransformer::consume(self, data)
    }

    fn finalize(&mut self) -> Result<HashValue, HashError> {
        BlockTransformer::finalize(self)
    }

    fn duplicate(&self) -> Box<dyn HashTransformer> {
        Box::new(self.clone())
    }

    fn consumed(&self) -> u64 {
        self.consumed
    }
}
